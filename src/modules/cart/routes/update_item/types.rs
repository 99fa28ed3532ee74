pub mod request {
    use crate::modules::auth::middleware::Identity;
    use serde::Deserialize;

    #[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
    #[serde(rename_all = "lowercase")]
    pub enum Action {
        Increase,
        Decrease,
    }

    #[derive(Deserialize)]
    pub struct Body {
        pub action: Action,
    }

    pub struct Payload {
        pub identity: Identity,
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::cart::pricing::Totals;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use bigdecimal::BigDecimal;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    pub struct UpdatedItem {
        pub id: String,
        pub quantity: i32,
        pub line_total: BigDecimal,
    }

    pub enum Success {
        ItemUpdated { item: UpdatedItem, totals: Totals },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ItemUpdated { item, totals } => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "item": item,
                        "totals": totals,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ItemNotFound,
        FailedToUpdateItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ItemNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "message": "Cart item not found" })),
                )
                    .into_response(),
                Self::FailedToUpdateItem => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to update cart item" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
