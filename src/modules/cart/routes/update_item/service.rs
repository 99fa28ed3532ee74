use super::types::{request, response};
use crate::modules::cart::{pricing, repository, service as cart};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let resolved = cart::resolve_cart(&ctx, &payload.identity)
        .await
        .map_err(|_| response::Error::FailedToUpdateItem)?;

    let item = repository::find_item_by_id(
        &ctx.db_conn.pool,
        payload.id.clone(),
        resolved.id.clone(),
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateItem)?
    .ok_or(response::Error::ItemNotFound)?;

    let item = match payload.body.action {
        request::Action::Increase => {
            repository::increment_item_quantity_by_id(&ctx.db_conn.pool, item.id, None).await
        }
        request::Action::Decrease => {
            repository::decrease_item_quantity_by_id(&ctx.db_conn.pool, item.id).await
        }
    }
    .map_err(|_| response::Error::FailedToUpdateItem)?;

    let items = repository::find_items_by_cart_id(&ctx.db_conn.pool, resolved.id)
        .await
        .map_err(|_| response::Error::FailedToUpdateItem)?;
    let totals = pricing::compute_totals(&items);
    let line_total = items
        .iter()
        .find(|full| full.id == item.id)
        .map(pricing::line_total)
        .unwrap_or_default();

    Ok(response::Success::ItemUpdated {
        item: response::UpdatedItem {
            id: item.id,
            quantity: item.quantity,
            line_total,
        },
        totals,
    })
}
