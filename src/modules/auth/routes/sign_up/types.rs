pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 3, max = 150))]
        pub username: String,
        #[validate(email)]
        pub email: String,
        #[validate(length(min = 8))]
        pub password: String,
        pub confirm_password: String,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::utils::validation;

    pub enum Success {
        Registered(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Registered(id) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "success": true,
                        "message": "Registration successful! Please login.",
                        "id": id,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidInput(ValidationErrors),
        PasswordMismatch,
        UsernameTaken,
        EmailTaken,
        FailedToRegister,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidInput(errors) => validation::into_response(errors).into_response(),
                Self::PasswordMismatch => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "message": "Passwords do not match" })),
                )
                    .into_response(),
                Self::UsernameTaken => (
                    StatusCode::CONFLICT,
                    Json(json!({ "success": false, "message": "Username already exists" })),
                )
                    .into_response(),
                Self::EmailTaken => (
                    StatusCode::CONFLICT,
                    Json(json!({ "success": false, "message": "Email already exists" })),
                )
                    .into_response(),
                Self::FailedToRegister => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to register" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
