use super::types::{request, response};
use crate::modules::contact::repository;
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
        repository::CreateContactMessagePayload {
            user_id: payload.identity.user().map(|user| user.id.clone()),
            name: payload.body.name,
            email: payload.body.email,
            subject: payload.body.subject,
            message: payload.body.message,
        },
    )
    .await
    .map(|message| response::Success::Submitted(message.id))
    .map_err(|_| response::Error::FailedToSubmit)
}
