use super::types::{request, response};
use crate::{
    modules::{auth::service as auth_service, user},
    types::Context,
};
use std::sync::Arc;
use ulid::Ulid;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .body
        .validate()
        .map_err(response::Error::InvalidInput)?;

    if payload.body.password != payload.body.confirm_password {
        return Err(response::Error::PasswordMismatch);
    }

    if user::repository::find_by_username(&ctx.db_conn.pool, payload.body.username.clone())
        .await
        .map_err(|_| response::Error::FailedToRegister)?
        .is_some()
    {
        return Err(response::Error::UsernameTaken);
    }

    if user::repository::find_by_email(&ctx.db_conn.pool, payload.body.email.clone())
        .await
        .map_err(|_| response::Error::FailedToRegister)?
        .is_some()
    {
        return Err(response::Error::EmailTaken);
    }

    let salt = Ulid::new().to_string();
    let password_hash = auth_service::hash_password(&payload.body.password, &salt);

    user::repository::create(
        &ctx.db_conn.pool,
        user::repository::CreateUserPayload {
            username: payload.body.username,
            email: payload.body.email,
            password_hash,
            salt,
        },
    )
    .await
    .map(|user| response::Success::Registered(user.id))
    .map_err(|_| response::Error::FailedToRegister)
}
