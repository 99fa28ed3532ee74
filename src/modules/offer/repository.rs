use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use sqlx::PgExecutor;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Offer {
    pub id: String,
    pub food_item_id: String,
    pub discount_percentage: BigDecimal,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// Unit price after a percentage discount, rounded to 2 decimal places.
fn apply_discount(catalog_price: &BigDecimal, discount_percentage: &BigDecimal) -> BigDecimal {
    let discount =
        discount_percentage.clone() * catalog_price.clone() / BigDecimal::from(100);
    (catalog_price.clone() - discount).round(2)
}

impl Offer {
    pub fn discounted_price(&self, catalog_price: &BigDecimal) -> BigDecimal {
        apply_discount(catalog_price, &self.discount_percentage)
    }
}

/// An active offer joined with the item it discounts, as listed to
/// clients.
#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct OfferListing {
    pub id: String,
    pub food_item_id: String,
    pub name: String,
    pub description: String,
    pub original_price: BigDecimal,
    pub discount_percentage: BigDecimal,
    pub icon_class: String,
    pub is_available: bool,
}

impl OfferListing {
    pub fn discounted_price(&self) -> BigDecimal {
        apply_discount(&self.original_price, &self.discount_percentage)
    }
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

/// First active offer for the item, oldest first. Multiple simultaneously
/// active offers are not deduplicated.
pub async fn find_active_by_food_item_id<'e, E: PgExecutor<'e>>(
    e: E,
    food_item_id: String,
) -> Result<Option<Offer>, Error> {
    sqlx::query_as::<_, Offer>(
        "
        SELECT * FROM offers
        WHERE food_item_id = $1 AND is_active = TRUE
        ORDER BY created_at
        LIMIT 1
        ",
    )
    .bind(food_item_id.clone())
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch offer by food item id {}: {}",
            food_item_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_active_listings<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<OfferListing>, Error> {
    sqlx::query_as::<_, OfferListing>(
        "
        SELECT
            offers.id,
            offers.food_item_id,
            offers.discount_percentage,
            food_items.name,
            food_items.description,
            food_items.price AS original_price,
            food_items.icon_class,
            food_items.is_available
        FROM offers
        INNER JOIN food_items ON food_items.id = offers.food_item_id
        WHERE offers.is_active = TRUE
        ORDER BY offers.created_at DESC
        ",
    )
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch active offers: {}", err);
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn offer(discount_percentage: &str) -> Offer {
        Offer {
            id: String::from("01J00000000000000000000001"),
            food_item_id: String::from("01J00000000000000000000002"),
            discount_percentage: BigDecimal::from_str(discount_percentage).unwrap(),
            is_active: true,
            created_at: chrono::NaiveDateTime::default(),
            updated_at: None,
        }
    }

    #[test]
    fn forty_percent_off_fifty() {
        let price = BigDecimal::from_str("50.00").unwrap();
        assert_eq!(
            offer("40.00").discounted_price(&price),
            BigDecimal::from_str("30.00").unwrap()
        );
    }

    #[test]
    fn discounted_price_is_rounded_to_two_decimals() {
        let price = BigDecimal::from_str("99.99").unwrap();
        // 99.99 - 33.3267 = 66.6633
        assert_eq!(
            offer("33.33").discounted_price(&price),
            BigDecimal::from_str("66.66").unwrap()
        );
    }

    #[test]
    fn zero_discount_keeps_the_catalog_price() {
        let price = BigDecimal::from_str("120.50").unwrap();
        assert_eq!(
            offer("0.00").discounted_price(&price),
            BigDecimal::from_str("120.50").unwrap()
        );
    }

    #[test]
    fn listing_prices_match_the_offer_formula() {
        let price = BigDecimal::from_str("99.99").unwrap();
        let listing = OfferListing {
            id: String::from("01J00000000000000000000001"),
            food_item_id: String::from("01J00000000000000000000002"),
            name: String::from("Paneer Tikka"),
            description: String::from("Char-grilled paneer"),
            original_price: price.clone(),
            discount_percentage: BigDecimal::from_str("33.33").unwrap(),
            icon_class: String::from("fa-utensils"),
            is_available: true,
        };

        assert_eq!(
            listing.discounted_price(),
            offer("33.33").discounted_price(&price)
        );
    }
}
