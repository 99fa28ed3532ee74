pub mod request {
    pub struct Payload {
        pub slug: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::menu::repository::{Category, FoodItem};

    pub enum Success {
        Items(Category, Vec<FoodItem>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Items(category, items) => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "category": category,
                        "items": items,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        CategoryNotFound,
        FailedToFetchItems,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CategoryNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "message": "Category not found" })),
                )
                    .into_response(),
                Self::FailedToFetchItems => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to fetch food items" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
