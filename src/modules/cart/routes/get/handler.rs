use super::service::service;
use super::types::request;
use crate::modules::auth::middleware::Identity;
use crate::types::Context;
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(State(ctx): State<Arc<Context>>, identity: Identity) -> impl IntoResponse {
    service(ctx, request::Payload { identity }).await
}
