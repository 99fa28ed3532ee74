pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 1))]
        pub message: String,
        #[validate(range(min = 1, max = 5))]
        pub stars: i32,
    }

    pub struct Payload {
        pub auth: Auth,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::review::repository::Review;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::utils::validation;

    pub enum Success {
        Created(Review),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Created(review) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "success": true,
                        "message": "Thank you for your review!",
                        "review": review,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidInput(ValidationErrors),
        FailedToCreateReview,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidInput(errors) => validation::into_response(errors).into_response(),
                Self::FailedToCreateReview => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to submit review" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
