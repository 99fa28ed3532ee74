use super::types::response;
use crate::modules::offer::repository;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    let listings = repository::find_active_listings(&ctx.db_conn.pool)
        .await
        .map_err(|_| response::Error::FailedToFetchOffers)?;

    let offers = listings
        .into_iter()
        .map(|listing| response::OfferItem {
            discounted_price: listing.discounted_price(),
            id: listing.id,
            food_item_id: listing.food_item_id,
            name: listing.name,
            description: listing.description,
            original_price: listing.original_price,
            discount_percentage: listing.discount_percentage,
            icon_class: listing.icon_class,
            is_available: listing.is_available,
        })
        .collect();

    Ok(response::Success::Offers(offers))
}
