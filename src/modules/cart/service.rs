use super::repository::{self, Cart, CartOwner, PriceSnapshot, PriceSource};
use crate::modules::auth::middleware::Identity;
use crate::modules::menu;
use crate::modules::offer;
use crate::types::Context;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

/// Fetches (or lazily creates) the cart the caller is entitled to:
/// user-keyed when signed in, session-keyed otherwise.
pub async fn resolve_cart(ctx: &Context, identity: &Identity) -> Result<Cart, Error> {
    let owner = match identity {
        Identity::User(user) => CartOwner::User(user.id.clone()),
        Identity::Session(token) => CartOwner::Session(token.clone()),
    };

    repository::find_or_create_by_owner(&ctx.db_conn.pool, owner)
        .await
        .map_err(|_| Error::UnexpectedError)
}

/// Resolves the price to freeze for a line item at add-time. Offer
/// pricing falls back to the catalog when no active offer exists, so the
/// stored source always matches the stored price.
pub async fn resolve_price_snapshot(
    ctx: &Context,
    food_item: &menu::repository::FoodItem,
    is_offer: bool,
) -> Result<PriceSnapshot, Error> {
    if is_offer {
        let offer =
            offer::repository::find_active_by_food_item_id(&ctx.db_conn.pool, food_item.id.clone())
                .await
                .map_err(|_| Error::UnexpectedError)?;

        if let Some(offer) = offer {
            return Ok(PriceSnapshot {
                unit_price: offer.discounted_price(&food_item.price),
                source: PriceSource::Offer,
            });
        }
    }

    Ok(PriceSnapshot {
        unit_price: food_item.price.clone(),
        source: PriceSource::Catalog,
    })
}
