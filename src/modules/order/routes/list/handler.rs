use super::service::service;
use super::types::request;
use crate::modules::auth::middleware::Auth;
use crate::types::Context;
use crate::utils::pagination::Pagination;
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: Auth,
    pagination: Pagination,
) -> impl IntoResponse {
    service(ctx, request::Payload { auth, pagination }).await
}
