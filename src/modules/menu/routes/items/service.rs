use super::types::{request, response};
use crate::{modules::menu::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let category = repository::find_category_by_slug(&ctx.db_conn.pool, payload.slug)
        .await
        .map_err(|_| response::Error::FailedToFetchItems)?
        .ok_or(response::Error::CategoryNotFound)?;

    repository::find_available_food_items_by_category_id(&ctx.db_conn.pool, category.id.clone())
        .await
        .map(|items| response::Success::Items(category, items))
        .map_err(|_| response::Error::FailedToFetchItems)
}
