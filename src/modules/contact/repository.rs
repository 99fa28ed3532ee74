use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: String,
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateContactMessagePayload {
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateContactMessagePayload,
) -> Result<ContactMessage, Error> {
    sqlx::query_as::<_, ContactMessage>(
        "
        INSERT INTO contact_messages (id, user_id, name, email, subject, message)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.user_id)
    .bind(payload.name)
    .bind(payload.email.clone())
    .bind(payload.subject)
    .bind(payload.message)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to create contact message from {}: {}",
            payload.email,
            err
        );
        Error::UnexpectedError
    })
}
