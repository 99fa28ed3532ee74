use super::types::{request, response};
use crate::modules::cart::repository::{CreateCartItemPayload, PriceSource};
use crate::modules::cart::{pricing, repository, service as cart};
use crate::modules::menu;
use crate::types::Context;
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .body
        .validate()
        .map_err(response::Error::InvalidInput)?;

    let food_item =
        menu::repository::find_food_item_by_id(&ctx.db_conn.pool, payload.body.food_item_id.clone())
            .await
            .map_err(|_| response::Error::FailedToAddItem)?
            .ok_or(response::Error::FoodItemNotFound)?;

    if !food_item.is_available {
        return Err(response::Error::ItemUnavailable);
    }

    let resolved = cart::resolve_cart(&ctx, &payload.identity)
        .await
        .map_err(|_| response::Error::FailedToAddItem)?;

    let existing = repository::find_item_by_food_item_id(
        &ctx.db_conn.pool,
        resolved.id.clone(),
        food_item.id.clone(),
    )
    .await
    .map_err(|_| response::Error::FailedToAddItem)?;

    let item = match existing {
        Some(existing) => {
            // A CATALOG line upgrades to OFFER when offer pricing is
            // requested and an offer actually resolves; never the
            // reverse.
            let upgrade = if payload.body.is_offer
                && existing.price.source == PriceSource::Catalog
            {
                let snapshot = cart::resolve_price_snapshot(&ctx, &food_item, true)
                    .await
                    .map_err(|_| response::Error::FailedToAddItem)?;

                (snapshot.source == PriceSource::Offer).then_some(snapshot)
            } else {
                None
            };

            repository::increment_item_quantity_by_id(&ctx.db_conn.pool, existing.id, upgrade)
                .await
                .map_err(|_| response::Error::FailedToAddItem)?
        }
        None => {
            let snapshot = cart::resolve_price_snapshot(&ctx, &food_item, payload.body.is_offer)
                .await
                .map_err(|_| response::Error::FailedToAddItem)?;

            repository::create_item(
                &ctx.db_conn.pool,
                CreateCartItemPayload {
                    cart_id: resolved.id.clone(),
                    food_item_id: food_item.id.clone(),
                    price: snapshot,
                },
            )
            .await
            .map_err(|_| response::Error::FailedToAddItem)?
        }
    };

    let items = repository::find_items_by_cart_id(&ctx.db_conn.pool, resolved.id)
        .await
        .map_err(|_| response::Error::FailedToAddItem)?;
    let totals = pricing::compute_totals(&items);

    Ok(response::Success::ItemAdded {
        session_token: payload.identity.session_token().map(String::from),
        item: response::AddedItem {
            id: item.id,
            food_item_id: item.food_item_id,
            quantity: item.quantity,
            unit_price: item.price.unit_price,
            is_offer_item: item.price.source == PriceSource::Offer,
        },
        totals,
    })
}
