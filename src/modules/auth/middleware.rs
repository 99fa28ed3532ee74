use super::repository;
use crate::modules::user;
use crate::modules::user::repository::User;
use crate::types::Context;
use axum::http::{request::Parts, StatusCode};
use axum::response::IntoResponse;
use axum::{async_trait, extract::Extension, extract::FromRequestParts, http, response::Response, Json};
use axum::RequestPartsExt;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use ulid::Ulid;

pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

enum Error {
    InvalidSession,
}

fn get_session_id_from_header(header: String) -> Result<String, Error> {
    header
        .split(' ')
        .nth(1)
        .map(|h| h.to_string())
        .ok_or(Error::InvalidSession)
}

fn get_authorization_header(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .map(|header| header.to_string())
}

async fn get_session_from_header(
    ctx: Arc<Context>,
    header: String,
) -> Result<repository::Session, Error> {
    let session_id = get_session_id_from_header(header)?;

    repository::find_session_by_id(&ctx.db_conn.pool, session_id)
        .await
        .map_err(|_| Error::InvalidSession)?
        .ok_or(Error::InvalidSession)
}

async fn get_user_from_header(ctx: Arc<Context>, header: String) -> Result<User, Error> {
    let session = get_session_from_header(ctx.clone(), header).await?;

    user::repository::find_by_id(&ctx.db_conn.pool, session.user_id)
        .await
        .map_err(|_| Error::InvalidSession)?
        .ok_or(Error::InvalidSession)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "success": false, "message": "Invalid session token" })),
    )
        .into_response()
}

/// Extractor for endpoints which require a signed in user.
#[derive(Serialize, Clone)]
pub struct Auth {
    pub user: User,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Extension(ctx) = parts
            .extract::<Extension<Arc<Context>>>()
            .await
            .map_err(|err| err.into_response())?;

        let header = get_authorization_header(parts).ok_or_else(unauthorized)?;

        get_user_from_header(ctx, header)
            .await
            .map(|user| Auth { user })
            .map_err(|_| unauthorized())
    }
}

/// Extractor for endpoints which work for signed in users as well as
/// anonymous visitors. A visitor is keyed by a client-held session token;
/// when the client sends none a fresh token is issued and echoed back in
/// the response payload. A bearer token whose user row has vanished
/// degrades to the session-keyed identity instead of erroring.
#[derive(Clone)]
pub enum Identity {
    User(User),
    Session(String),
}

impl Identity {
    pub fn user(&self) -> Option<&User> {
        match self {
            Identity::User(user) => Some(user),
            Identity::Session(_) => None,
        }
    }

    pub fn session_token(&self) -> Option<&str> {
        match self {
            Identity::User(_) => None,
            Identity::Session(token) => Some(token.as_str()),
        }
    }
}

fn get_session_token_header(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|header| header.to_str().ok())
        .map(|header| header.to_string())
        .filter(|token| !token.is_empty())
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Identity {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Extension(ctx) = parts
            .extract::<Extension<Arc<Context>>>()
            .await
            .map_err(|err| err.into_response())?;

        if let Some(header) = get_authorization_header(parts) {
            if let Ok(session) = get_session_from_header(ctx.clone(), header).await {
                match user::repository::find_by_id(&ctx.db_conn.pool, session.user_id.clone())
                    .await
                {
                    Ok(Some(user)) => return Ok(Identity::User(user)),
                    _ => {
                        tracing::warn!(
                            "Session {} references a missing user, falling back to session identity",
                            session.id
                        );
                        return Ok(Identity::Session(session.id));
                    }
                }
            }
        }

        let token = get_session_token_header(parts).unwrap_or_else(|| Ulid::new().to_string());

        Ok(Identity::Session(token))
    }
}
