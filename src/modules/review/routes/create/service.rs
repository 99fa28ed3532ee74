use super::types::{request, response};
use crate::modules::review::repository;
use crate::types::Context;
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .body
        .validate()
        .map_err(response::Error::InvalidInput)?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateReviewPayload {
            user_id: payload.auth.user.id,
            message: payload.body.message,
            stars: payload.body.stars,
        },
    )
    .await
    .map(response::Success::Created)
    .map_err(|_| response::Error::FailedToCreateReview)
}
