use super::types::{request, response};
use crate::modules::cart::{pricing, repository, service as cart};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let resolved = cart::resolve_cart(&ctx, &payload.identity)
        .await
        .map_err(|_| response::Error::FailedToRemoveItem)?;

    let deleted =
        repository::delete_item_by_id(&ctx.db_conn.pool, payload.id, resolved.id.clone())
            .await
            .map_err(|_| response::Error::FailedToRemoveItem)?;

    if !deleted {
        return Err(response::Error::ItemNotFound);
    }

    let items = repository::find_items_by_cart_id(&ctx.db_conn.pool, resolved.id)
        .await
        .map_err(|_| response::Error::FailedToRemoveItem)?;

    Ok(response::Success::ItemRemoved(pricing::compute_totals(
        &items,
    )))
}
