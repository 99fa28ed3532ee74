use super::types::response;
use crate::modules::review::repository;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    repository::find_latest(&ctx.db_conn.pool)
        .await
        .map(response::Success::Reviews)
        .map_err(|_| response::Error::FailedToFetchReviews)
}
