pub mod request {
    use crate::modules::auth::middleware::Auth;
    use crate::utils::pagination::Pagination;

    pub struct Payload {
        pub auth: Auth,
        pub pagination: Pagination,
    }
}

pub mod response {
    use crate::modules::order::repository::Order;
    use crate::utils::pagination::Paginated;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Orders(Paginated<Order>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Orders(orders) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "orders": orders })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchOrders,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchOrders => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to fetch orders" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
