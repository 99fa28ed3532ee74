use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::types::{BigDecimal, Json};
use sqlx::{FromRow, PgConnection, PgExecutor, Row};
use std::str::FromStr;
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// The kitchen workflow moves strictly forward; any non-terminal
    /// order can still be cancelled.
    pub fn can_transition_to(&self, next: &Self) -> bool {
        match (self, next) {
            (Self::Pending, Self::Confirmed) => true,
            (Self::Confirmed, Self::Preparing) => true,
            (Self::Preparing, Self::Ready) => true,
            (Self::Ready, Self::Delivered) => true,
            (current, Self::Cancelled) => !current.is_terminal(),
            _ => false,
        }
    }
}

impl ToString for OrderStatus {
    fn to_string(&self) -> String {
        match self {
            Self::Pending => String::from("PENDING"),
            Self::Confirmed => String::from("CONFIRMED"),
            Self::Preparing => String::from("PREPARING"),
            Self::Ready => String::from("READY"),
            Self::Delivered => String::from("DELIVERED"),
            Self::Cancelled => String::from("CANCELLED"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "PREPARING" => Ok(Self::Preparing),
            "READY" => Ok(Self::Ready),
            "DELIVERED" => Ok(Self::Delivered),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(format!("unknown order status {}", other)),
        }
    }
}

/// One line of the frozen order snapshot, serialized into the order's
/// JSONB column. Never re-priced after checkout.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrderItem {
    pub food_item_id: String,
    pub name: String,
    pub description: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
    pub line_total: BigDecimal,
    pub is_offer_item: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_price: Option<BigDecimal>,
}

#[derive(Serialize, Clone, Debug)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub order_number: String,
    pub items: Vec<OrderItem>,
    pub subtotal: BigDecimal,
    pub delivery_fee: BigDecimal,
    pub tax: BigDecimal,
    pub total: BigDecimal,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl FromRow<'_, PgRow> for Order {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let status = row
            .try_get::<String, _>("status")?
            .parse::<OrderStatus>()
            .map_err(|err| sqlx::Error::ColumnDecode {
                index: String::from("status"),
                source: err.into(),
            })?;

        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            order_number: row.try_get("order_number")?,
            items: row.try_get::<Json<Vec<OrderItem>>, _>("items")?.0,
            subtotal: row.try_get("subtotal")?,
            delivery_fee: row.try_get("delivery_fee")?,
            tax: row.try_get("tax")?,
            total: row.try_get("total")?,
            status,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

pub struct CreateOrderPayload {
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub subtotal: BigDecimal,
    pub delivery_fee: BigDecimal,
    pub tax: BigDecimal,
    pub total: BigDecimal,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

const ORDER_NUMBER_ATTEMPTS: u32 = 5;

/// `CKW` + UTC date + 4 random digits, e.g. `CKW202608301234`.
pub fn generate_order_number() -> String {
    format!(
        "CKW{}{:04}",
        chrono::Utc::now().format("%Y%m%d"),
        Ulid::new().random() % 10000
    )
}

fn is_order_number_collision(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db_err| {
            db_err.is_unique_violation()
                && db_err.constraint() == Some("orders_order_number_key")
        })
        .unwrap_or(false)
}

/// Inserts the order, regenerating the order number on a collision a
/// bounded number of times. Takes a connection rather than an executor so
/// the retry loop can reuse it inside the checkout transaction.
pub async fn create(conn: &mut PgConnection, payload: CreateOrderPayload) -> Result<Order, Error> {
    let id = Ulid::new().to_string();

    for _ in 0..ORDER_NUMBER_ATTEMPTS {
        let result = sqlx::query_as::<_, Order>(
            "
            INSERT INTO orders
                (id, user_id, order_number, items, subtotal, delivery_fee, tax, total, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            ",
        )
        .bind(id.clone())
        .bind(payload.user_id.clone())
        .bind(generate_order_number())
        .bind(Json(payload.items.clone()))
        .bind(payload.subtotal.clone())
        .bind(payload.delivery_fee.clone())
        .bind(payload.tax.clone())
        .bind(payload.total.clone())
        .bind(OrderStatus::Pending.to_string())
        .fetch_one(&mut *conn)
        .await;

        match result {
            Ok(order) => return Ok(order),
            Err(err) if is_order_number_collision(&err) => continue,
            Err(err) => {
                tracing::error!("Error occurred while trying to create order: {}", err);
                return Err(Error::UnexpectedError);
            }
        }
    }

    tracing::error!(
        "Gave up creating order for user {} after {} order number collisions",
        payload.user_id,
        ORDER_NUMBER_ATTEMPTS
    );
    Err(Error::UnexpectedError)
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Order>, Error> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch order by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_by_id_and_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    user_id: String,
) -> Result<Option<Order>, Error> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1 AND user_id = $2")
        .bind(id.clone())
        .bind(user_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch order by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many_by_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
    limit: i64,
    offset: i64,
) -> Result<Vec<Order>, Error> {
    sqlx::query_as::<_, Order>(
        "
        SELECT * FROM orders
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        ",
    )
    .bind(user_id.clone())
    .bind(limit)
    .bind(offset)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch orders for user {}: {}",
            user_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn count_by_user_id<'e, E: PgExecutor<'e>>(e: E, user_id: String) -> Result<i64, Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders WHERE user_id = $1")
        .bind(user_id.clone())
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to count orders for user {}: {}",
                user_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn update_status_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    status: OrderStatus,
) -> Result<Option<Order>, Error> {
    sqlx::query_as::<_, Order>(
        "UPDATE orders SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(id.clone())
    .bind(status.to_string())
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update status of order {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_moves_strictly_forward() {
        assert!(OrderStatus::Pending.can_transition_to(&OrderStatus::Confirmed));
        assert!(OrderStatus::Confirmed.can_transition_to(&OrderStatus::Preparing));
        assert!(OrderStatus::Preparing.can_transition_to(&OrderStatus::Ready));
        assert!(OrderStatus::Ready.can_transition_to(&OrderStatus::Delivered));

        assert!(!OrderStatus::Pending.can_transition_to(&OrderStatus::Preparing));
        assert!(!OrderStatus::Ready.can_transition_to(&OrderStatus::Confirmed));
        assert!(!OrderStatus::Confirmed.can_transition_to(&OrderStatus::Pending));
    }

    #[test]
    fn any_non_terminal_order_can_be_cancelled() {
        assert!(OrderStatus::Pending.can_transition_to(&OrderStatus::Cancelled));
        assert!(OrderStatus::Confirmed.can_transition_to(&OrderStatus::Cancelled));
        assert!(OrderStatus::Preparing.can_transition_to(&OrderStatus::Cancelled));
        assert!(OrderStatus::Ready.can_transition_to(&OrderStatus::Cancelled));
    }

    #[test]
    fn terminal_states_accept_no_transition() {
        for next in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert!(!OrderStatus::Delivered.can_transition_to(&next));
            assert!(!OrderStatus::Cancelled.can_transition_to(&next));
        }
    }

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.to_string().parse::<OrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn order_number_format() {
        let number = generate_order_number();

        assert_eq!(number.len(), 15);
        assert!(number.starts_with("CKW"));
        assert!(number[3..].chars().all(|c| c.is_ascii_digit()));
        assert!(number[3..11].starts_with("20"));
    }
}
