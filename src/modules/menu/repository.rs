use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use sqlx::PgExecutor;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub emoji: String,
    pub slug: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct FoodItem {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub icon_class: String,
    pub is_available: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn find_active_categories<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<Category>, Error> {
    sqlx::query_as::<_, Category>(
        "SELECT * FROM categories WHERE is_active = TRUE ORDER BY created_at",
    )
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch categories: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_category_by_slug<'e, E: PgExecutor<'e>>(
    e: E,
    slug: String,
) -> Result<Option<Category>, Error> {
    sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE slug = $1")
        .bind(slug.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch category by slug {}: {}",
                slug,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_available_food_items_by_category_id<'e, E: PgExecutor<'e>>(
    e: E,
    category_id: String,
) -> Result<Vec<FoodItem>, Error> {
    sqlx::query_as::<_, FoodItem>(
        "
        SELECT * FROM food_items
        WHERE category_id = $1 AND is_available = TRUE
        ORDER BY created_at
        ",
    )
    .bind(category_id.clone())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch food items by category id {}: {}",
            category_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_food_item_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
) -> Result<Option<FoodItem>, Error> {
    sqlx::query_as::<_, FoodItem>("SELECT * FROM food_items WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch food item by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}
