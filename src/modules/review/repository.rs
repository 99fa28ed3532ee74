use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub message: String,
    pub stars: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// A review joined with the name of the user who wrote it.
#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct ReviewWithAuthor {
    pub id: String,
    pub message: String,
    pub stars: i32,
    pub author: String,
    pub created_at: NaiveDateTime,
}

pub struct CreateReviewPayload {
    pub user_id: String,
    pub message: String,
    pub stars: i32,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

const REVIEW_FEED_SIZE: i64 = 4;

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateReviewPayload,
) -> Result<Review, Error> {
    sqlx::query_as::<_, Review>(
        "
        INSERT INTO reviews (id, user_id, message, stars)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.user_id.clone())
    .bind(payload.message)
    .bind(payload.stars)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to create review for user {}: {}",
            payload.user_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_latest<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<ReviewWithAuthor>, Error> {
    sqlx::query_as::<_, ReviewWithAuthor>(
        "
        SELECT
            reviews.id,
            reviews.message,
            reviews.stars,
            reviews.created_at,
            users.username AS author
        FROM reviews
        INNER JOIN users ON users.id = reviews.user_id
        ORDER BY reviews.created_at DESC
        LIMIT $1
        ",
    )
    .bind(REVIEW_FEED_SIZE)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch latest reviews: {}", err);
        Error::UnexpectedError
    })
}
