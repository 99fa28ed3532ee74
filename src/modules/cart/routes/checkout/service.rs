use super::types::{request, response};
use crate::modules::cart::repository::{CartOwner, PriceSource};
use crate::modules::cart::{pricing, repository};
use crate::modules::order;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let cart = repository::find_or_create_by_owner(
        &ctx.db_conn.pool,
        CartOwner::User(payload.auth.user.id.clone()),
    )
    .await
    .map_err(|_| response::Error::FailedToCheckout)?;

    let items = repository::find_items_by_cart_id(&ctx.db_conn.pool, cart.id.clone())
        .await
        .map_err(|_| response::Error::FailedToCheckout)?;

    if items.is_empty() {
        return Err(response::Error::EmptyCart);
    }

    let totals = pricing::compute_totals(&items);
    let snapshot = items
        .iter()
        .map(|item| order::repository::OrderItem {
            food_item_id: item.food_item_id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            unit_price: pricing::effective_unit_price(item),
            quantity: item.quantity,
            line_total: pricing::line_total(item),
            is_offer_item: item.price.source == PriceSource::Offer,
            offer_price: (item.price.source == PriceSource::Offer)
                .then(|| item.price.unit_price.clone()),
        })
        .collect();

    let mut tx = ctx
        .db_conn
        .pool
        .begin()
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to start checkout: {}", err);
            response::Error::FailedToCheckout
        })?;

    let order = order::repository::create(
        &mut tx,
        order::repository::CreateOrderPayload {
            user_id: payload.auth.user.id,
            items: snapshot,
            subtotal: totals.subtotal,
            delivery_fee: totals.delivery_fee,
            tax: totals.tax,
            total: totals.total,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCheckout)?;

    repository::delete_items_by_cart_id(&mut *tx, cart.id)
        .await
        .map_err(|_| response::Error::FailedToCheckout)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Error occurred while trying to commit checkout: {}", err);
        response::Error::FailedToCheckout
    })?;

    Ok(response::Success::CheckedOut(order))
}
