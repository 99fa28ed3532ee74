pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub auth: Auth,
    }
}

pub mod response {
    use crate::modules::order::repository::Order;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        CheckedOut(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CheckedOut(order) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "success": true,
                        "order": {
                            "id": order.id,
                            "order_number": order.order_number,
                            "total": order.total,
                        },
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        EmptyCart,
        FailedToCheckout,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::EmptyCart => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "message": "Your cart is empty" })),
                )
                    .into_response(),
                Self::FailedToCheckout => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to place order" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
