use super::service::service;
use crate::modules::auth::middleware::Auth;
use axum::response::IntoResponse;

pub async fn handler(auth: Auth) -> impl IntoResponse {
    service(auth).await
}
