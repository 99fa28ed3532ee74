pub mod request {}

pub mod response {
    use crate::modules::review::repository::ReviewWithAuthor;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Reviews(Vec<ReviewWithAuthor>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Reviews(reviews) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "reviews": reviews })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchReviews,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchReviews => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to fetch reviews" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
