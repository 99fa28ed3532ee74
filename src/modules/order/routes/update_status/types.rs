pub mod request {
    use crate::modules::auth::middleware::Auth;
    use crate::modules::order::repository::OrderStatus;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub status: OrderStatus,
    }

    pub struct Payload {
        pub auth: Auth,
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::order::repository::{Order, OrderStatus};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        StatusUpdated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::StatusUpdated(order) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "order": order })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        Forbidden,
        OrderNotFound,
        InvalidTransition(OrderStatus, OrderStatus),
        FailedToUpdateStatus,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Forbidden => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "success": false, "message": "Staff access required" })),
                )
                    .into_response(),
                Self::OrderNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "message": "Order not found" })),
                )
                    .into_response(),
                Self::InvalidTransition(from, to) => (
                    StatusCode::CONFLICT,
                    Json(json!({
                        "success": false,
                        "message": format!(
                            "Cannot move order from {} to {}",
                            from.to_string(),
                            to.to_string()
                        ),
                    })),
                )
                    .into_response(),
                Self::FailedToUpdateStatus => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to update order status" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
