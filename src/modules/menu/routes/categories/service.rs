use super::types::response;
use crate::{modules::menu::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    repository::find_active_categories(&ctx.db_conn.pool)
        .await
        .map(response::Success::Categories)
        .map_err(|_| response::Error::FailedToFetchCategories)
}
