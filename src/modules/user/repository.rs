use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    #[serde(skip)]
    pub salt: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub is_staff: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateUserPayload {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub salt: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateUserPayload) -> Result<User, Error> {
    sqlx::query_as::<_, User>(
        "
        INSERT INTO users (
            id,
            username,
            email,
            password_hash,
            salt
        )
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.username)
    .bind(payload.email)
    .bind(payload.password_hash)
    .bind(payload.salt)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a user: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<User>, Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch user by id: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_username<'e, E: PgExecutor<'e>>(
    e: E,
    username: String,
) -> Result<Option<User>, Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch user by username: {}",
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(
    e: E,
    email: String,
) -> Result<Option<User>, Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch user by email: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_username_or_email<'e, E: PgExecutor<'e>>(
    e: E,
    username_or_email: String,
) -> Result<Option<User>, Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1 OR email = $1")
        .bind(username_or_email)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch user by username or email: {}",
                err
            );
            Error::UnexpectedError
        })
}

pub struct UpdateProfilePayload {
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

pub async fn update_profile_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateProfilePayload,
) -> Result<User, Error> {
    sqlx::query_as::<_, User>(
        "
        UPDATE users SET
            email = COALESCE($1, email),
            phone_number = COALESCE($2, phone_number),
            address = COALESCE($3, address),
            updated_at = NOW()
        WHERE
            id = $4
        RETURNING *
        ",
    )
    .bind(payload.email)
    .bind(payload.phone_number)
    .bind(payload.address)
    .bind(id.clone())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update user by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}
