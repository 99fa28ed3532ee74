pub mod request {
    use crate::modules::auth::middleware::Identity;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 1, max = 100))]
        pub name: String,
        #[validate(email)]
        pub email: String,
        #[validate(length(min = 1, max = 200))]
        pub subject: String,
        #[validate(length(min = 1))]
        pub message: String,
    }

    pub struct Payload {
        pub identity: Identity,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::utils::validation;

    pub enum Success {
        Submitted(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Submitted(id) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "success": true,
                        "message": "Thank you for reaching out! We will get back to you soon.",
                        "id": id,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidInput(ValidationErrors),
        FailedToSubmit,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidInput(errors) => validation::into_response(errors).into_response(),
                Self::FailedToSubmit => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to submit message" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
