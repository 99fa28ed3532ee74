use super::types::{request, response};
use crate::modules::cart::repository::PriceSource;
use crate::modules::cart::{pricing, repository, service as cart};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let resolved = cart::resolve_cart(&ctx, &payload.identity)
        .await
        .map_err(|_| response::Error::FailedToFetchCart)?;

    let items = repository::find_items_by_cart_id(&ctx.db_conn.pool, resolved.id)
        .await
        .map_err(|_| response::Error::FailedToFetchCart)?;

    let totals = pricing::compute_totals(&items);
    let items = items
        .into_iter()
        .map(|item| response::CartItemView {
            unit_price: pricing::effective_unit_price(&item),
            line_total: pricing::line_total(&item),
            is_offer_item: item.price.source == PriceSource::Offer,
            id: item.id,
            food_item_id: item.food_item_id,
            name: item.name,
            description: item.description,
            icon_class: item.icon_class,
            quantity: item.quantity,
        })
        .collect();

    Ok(response::Success::Cart {
        session_token: payload.identity.session_token().map(String::from),
        items,
        totals,
    })
}
