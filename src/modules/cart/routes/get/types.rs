pub mod request {
    use crate::modules::auth::middleware::Identity;

    pub struct Payload {
        pub identity: Identity,
    }
}

pub mod response {
    use crate::modules::cart::pricing::Totals;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use bigdecimal::BigDecimal;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    pub struct CartItemView {
        pub id: String,
        pub food_item_id: String,
        pub name: String,
        pub description: String,
        pub icon_class: String,
        pub quantity: i32,
        pub unit_price: BigDecimal,
        pub line_total: BigDecimal,
        pub is_offer_item: bool,
    }

    pub enum Success {
        Cart {
            session_token: Option<String>,
            items: Vec<CartItemView>,
            totals: Totals,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Cart {
                    session_token,
                    items,
                    totals,
                } => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "session_token": session_token,
                        "items": items,
                        "totals": totals,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchCart,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchCart => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to fetch cart" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
