use super::types::{request, response};
use crate::{modules::user::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .body
        .validate()
        .map_err(response::Error::InvalidInput)?;

    repository::update_profile_by_id(
        &ctx.db_conn.pool,
        payload.auth.user.id.clone(),
        repository::UpdateProfilePayload {
            email: payload.body.email,
            phone_number: payload.body.phone_number,
            address: payload.body.address,
        },
    )
    .await
    .map(response::Success::ProfileUpdated)
    .map_err(|_| response::Error::FailedToUpdateProfile)
}
