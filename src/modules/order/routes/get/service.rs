use super::types::{request, response};
use crate::modules::order::repository;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_id_and_user_id(&ctx.db_conn.pool, payload.id, payload.auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchOrder)?
        .map(response::Success::Order)
        .ok_or(response::Error::OrderNotFound)
}
