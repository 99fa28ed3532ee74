use super::types::{request, response};
use crate::{
    modules::{
        auth::{repository, service as auth_service},
        user,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let user = user::repository::find_by_username_or_email(
        &ctx.db_conn.pool,
        payload.body.username_or_email.clone(),
    )
    .await
    .map_err(|_| response::Error::FailedToSignIn)?
    .ok_or(response::Error::InvalidCredentials)?;

    if !auth_service::verify_password(&payload.body.password, &user.salt, &user.password_hash) {
        return Err(response::Error::InvalidCredentials);
    }

    repository::create_session(&ctx.db_conn.pool, user.id.clone())
        .await
        .map(|session| response::Success::SignedIn(session, user))
        .map_err(|_| response::Error::FailedToSignIn)
}
