pub mod request {
    use crate::modules::auth::middleware::Identity;

    pub struct Payload {
        pub identity: Identity,
        pub id: String,
    }
}

pub mod response {
    use crate::modules::cart::pricing::Totals;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ItemRemoved(Totals),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ItemRemoved(totals) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "totals": totals })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ItemNotFound,
        FailedToRemoveItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ItemNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "message": "Cart item not found" })),
                )
                    .into_response(),
                Self::FailedToRemoveItem => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to remove cart item" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
