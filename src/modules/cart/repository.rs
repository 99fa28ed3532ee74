use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::types::BigDecimal;
use sqlx::{FromRow, PgExecutor, Row};
use std::str::FromStr;
use ulid::Ulid;

/// Who a cart belongs to. Anonymous visitors get a session-keyed cart
/// which is distinct from every user-keyed one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartOwner {
    User(String),
    Session(String),
}

impl CartOwner {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::User(_) => "USER",
            Self::Session(_) => "SESSION",
        }
    }

    pub fn reference(&self) -> &str {
        match self {
            Self::User(reference) | Self::Session(reference) => reference,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Cart {
    pub id: String,
    pub owner: CartOwner,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl FromRow<'_, PgRow> for Cart {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let owner_kind = row.try_get::<String, _>("owner_kind")?;
        let owner_ref = row.try_get::<String, _>("owner_ref")?;
        let owner = match owner_kind.as_str() {
            "USER" => CartOwner::User(owner_ref),
            "SESSION" => CartOwner::Session(owner_ref),
            other => {
                return Err(sqlx::Error::ColumnDecode {
                    index: String::from("owner_kind"),
                    source: format!("unknown cart owner kind {}", other).into(),
                })
            }
        };

        Ok(Self {
            id: row.try_get("id")?,
            owner,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceSource {
    Catalog,
    Offer,
}

impl ToString for PriceSource {
    fn to_string(&self) -> String {
        match self {
            Self::Catalog => String::from("CATALOG"),
            Self::Offer => String::from("OFFER"),
        }
    }
}

impl FromStr for PriceSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CATALOG" => Ok(Self::Catalog),
            "OFFER" => Ok(Self::Offer),
            other => Err(format!("unknown price source {}", other)),
        }
    }
}

/// Unit price captured when the line item entered the cart. Never
/// recomputed afterwards; a line is an offer item iff `source` is
/// `OFFER`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PriceSnapshot {
    pub unit_price: BigDecimal,
    pub source: PriceSource,
}

#[derive(Clone, Debug)]
pub struct CartItem {
    pub id: String,
    pub cart_id: String,
    pub food_item_id: String,
    pub quantity: i32,
    pub price: PriceSnapshot,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl FromRow<'_, PgRow> for CartItem {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            cart_id: row.try_get("cart_id")?,
            food_item_id: row.try_get("food_item_id")?,
            quantity: row.try_get("quantity")?,
            price: price_snapshot_from_row(row)?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

/// A cart line joined with the food item it references.
#[derive(Clone, Debug)]
pub struct FullCartItem {
    pub id: String,
    pub food_item_id: String,
    pub quantity: i32,
    pub price: PriceSnapshot,
    pub name: String,
    pub description: String,
    pub catalog_price: BigDecimal,
    pub icon_class: String,
    pub is_available: bool,
}

impl FromRow<'_, PgRow> for FullCartItem {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            food_item_id: row.try_get("food_item_id")?,
            quantity: row.try_get("quantity")?,
            price: price_snapshot_from_row(row)?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            catalog_price: row.try_get("catalog_price")?,
            icon_class: row.try_get("icon_class")?,
            is_available: row.try_get("is_available")?,
        })
    }
}

fn price_snapshot_from_row(row: &PgRow) -> Result<PriceSnapshot, sqlx::Error> {
    let source = row
        .try_get::<String, _>("price_source")?
        .parse::<PriceSource>()
        .map_err(|err| sqlx::Error::ColumnDecode {
            index: String::from("price_source"),
            source: err.into(),
        })?;

    Ok(PriceSnapshot {
        unit_price: row.try_get("frozen_price")?,
        source,
    })
}

pub struct CreateCartItemPayload {
    pub cart_id: String,
    pub food_item_id: String,
    pub price: PriceSnapshot,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn find_or_create_by_owner<'e, E: PgExecutor<'e>>(
    e: E,
    owner: CartOwner,
) -> Result<Cart, Error> {
    sqlx::query_as::<_, Cart>(
        "
        INSERT INTO carts (id, owner_kind, owner_ref)
        VALUES ($1, $2, $3)
        ON CONFLICT (owner_kind, owner_ref)
        DO UPDATE SET updated_at = NOW()
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(owner.kind())
    .bind(owner.reference().to_string())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch or create cart for {} {}: {}",
            owner.kind(),
            owner.reference(),
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_items_by_cart_id<'e, E: PgExecutor<'e>>(
    e: E,
    cart_id: String,
) -> Result<Vec<FullCartItem>, Error> {
    sqlx::query_as::<_, FullCartItem>(
        "
        SELECT
            cart_items.id,
            cart_items.food_item_id,
            cart_items.quantity,
            cart_items.frozen_price,
            cart_items.price_source,
            food_items.name,
            food_items.description,
            food_items.price AS catalog_price,
            food_items.icon_class,
            food_items.is_available
        FROM cart_items
        INNER JOIN food_items ON food_items.id = cart_items.food_item_id
        WHERE cart_items.cart_id = $1
        ORDER BY cart_items.created_at
        ",
    )
    .bind(cart_id.clone())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch items for cart {}: {}",
            cart_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_item_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    cart_id: String,
) -> Result<Option<CartItem>, Error> {
    sqlx::query_as::<_, CartItem>("SELECT * FROM cart_items WHERE id = $1 AND cart_id = $2")
        .bind(id.clone())
        .bind(cart_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch cart item by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_item_by_food_item_id<'e, E: PgExecutor<'e>>(
    e: E,
    cart_id: String,
    food_item_id: String,
) -> Result<Option<CartItem>, Error> {
    sqlx::query_as::<_, CartItem>(
        "SELECT * FROM cart_items WHERE cart_id = $1 AND food_item_id = $2",
    )
    .bind(cart_id)
    .bind(food_item_id.clone())
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch cart item by food item id {}: {}",
            food_item_id,
            err
        );
        Error::UnexpectedError
    })
}

/// Inserts a fresh line with quantity 1. The unique `(cart_id,
/// food_item_id)` constraint turns a concurrent duplicate insert into a
/// quantity bump instead of an error.
pub async fn create_item<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateCartItemPayload,
) -> Result<CartItem, Error> {
    sqlx::query_as::<_, CartItem>(
        "
        INSERT INTO cart_items (id, cart_id, food_item_id, quantity, frozen_price, price_source)
        VALUES ($1, $2, $3, 1, $4, $5)
        ON CONFLICT (cart_id, food_item_id)
        DO UPDATE SET quantity = cart_items.quantity + 1, updated_at = NOW()
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.cart_id)
    .bind(payload.food_item_id.clone())
    .bind(payload.price.unit_price)
    .bind(payload.price.source.to_string())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to create cart item for food item {}: {}",
            payload.food_item_id,
            err
        );
        Error::UnexpectedError
    })
}

/// Bumps the quantity by one. When `price` is given the frozen snapshot
/// is replaced as well; used to upgrade a CATALOG line to OFFER.
pub async fn increment_item_quantity_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    price: Option<PriceSnapshot>,
) -> Result<CartItem, Error> {
    let result = match price {
        Some(price) => {
            sqlx::query_as::<_, CartItem>(
                "
                UPDATE cart_items
                SET quantity = quantity + 1,
                    frozen_price = $2,
                    price_source = $3,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *
                ",
            )
            .bind(id.clone())
            .bind(price.unit_price)
            .bind(price.source.to_string())
            .fetch_one(e)
            .await
        }
        None => {
            sqlx::query_as::<_, CartItem>(
                "
                UPDATE cart_items
                SET quantity = quantity + 1, updated_at = NOW()
                WHERE id = $1
                RETURNING *
                ",
            )
            .bind(id.clone())
            .fetch_one(e)
            .await
        }
    };

    result.map_err(|err| {
        tracing::error!(
            "Error occurred while trying to increment cart item {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

/// Drops the quantity by one, floored at 1. A decrease on a single-unit
/// line is a no-op rather than a deletion.
pub async fn decrease_item_quantity_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
) -> Result<CartItem, Error> {
    sqlx::query_as::<_, CartItem>(
        "
        UPDATE cart_items
        SET quantity = CASE WHEN quantity > 1 THEN quantity - 1 ELSE quantity END,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id.clone())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to decrease cart item {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_item_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    cart_id: String,
) -> Result<bool, Error> {
    sqlx::query("DELETE FROM cart_items WHERE id = $1 AND cart_id = $2")
        .bind(id.clone())
        .bind(cart_id)
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete cart item {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn delete_items_by_cart_id<'e, E: PgExecutor<'e>>(
    e: E,
    cart_id: String,
) -> Result<(), Error> {
    sqlx::query("DELETE FROM cart_items WHERE cart_id = $1")
        .bind(cart_id.clone())
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to clear cart {}: {}",
                cart_id,
                err
            );
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_kind_and_reference() {
        let owner = CartOwner::User(String::from("01J00000000000000000000001"));
        assert_eq!(owner.kind(), "USER");
        assert_eq!(owner.reference(), "01J00000000000000000000001");

        let owner = CartOwner::Session(String::from("01J00000000000000000000002"));
        assert_eq!(owner.kind(), "SESSION");
        assert_eq!(owner.reference(), "01J00000000000000000000002");
    }

    #[test]
    fn price_source_round_trips_through_text() {
        assert_eq!(
            PriceSource::Catalog.to_string().parse::<PriceSource>(),
            Ok(PriceSource::Catalog)
        );
        assert_eq!(
            PriceSource::Offer.to_string().parse::<PriceSource>(),
            Ok(PriceSource::Offer)
        );
        assert!("COUPON".parse::<PriceSource>().is_err());
    }
}
