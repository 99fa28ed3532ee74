pub mod request {}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use bigdecimal::BigDecimal;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    pub struct OfferItem {
        pub id: String,
        pub food_item_id: String,
        pub name: String,
        pub description: String,
        pub original_price: BigDecimal,
        pub discounted_price: BigDecimal,
        pub discount_percentage: BigDecimal,
        pub icon_class: String,
        pub is_available: bool,
    }

    pub enum Success {
        Offers(Vec<OfferItem>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Offers(offers) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "offers": offers })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchOffers,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchOffers => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to fetch offers" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
