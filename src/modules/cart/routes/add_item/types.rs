pub mod request {
    use crate::modules::auth::middleware::Identity;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 1))]
        pub food_item_id: String,
        #[serde(default)]
        pub is_offer: bool,
    }

    pub struct Payload {
        pub identity: Identity,
        pub body: Body,
    }
}

#[cfg(test)]
mod tests {
    use super::request;
    use crate::modules::auth::middleware::Identity;
    use serde_json::json;

    #[test]
    fn body_defaults_to_catalog_pricing() {
        let body: request::Body =
            serde_json::from_value(json!({ "food_item_id": "01J00000000000000000000001" }))
                .unwrap();

        assert_eq!(body.food_item_id, "01J00000000000000000000001");
        assert!(!body.is_offer);
    }

    #[test]
    fn body_and_identity_assemble_into_a_payload() {
        let body: request::Body = serde_json::from_value(json!({
            "food_item_id": "01J00000000000000000000001",
            "is_offer": true,
        }))
        .unwrap();

        let payload = request::Payload {
            identity: Identity::Session(String::from("01J00000000000000000000002")),
            body,
        };

        assert!(payload.body.is_offer);
        assert_eq!(
            payload.identity.session_token(),
            Some("01J00000000000000000000002")
        );
    }
}

pub mod response {
    use crate::modules::cart::pricing::Totals;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use bigdecimal::BigDecimal;
    use serde::Serialize;
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::utils::validation;

    #[derive(Serialize)]
    pub struct AddedItem {
        pub id: String,
        pub food_item_id: String,
        pub quantity: i32,
        pub unit_price: BigDecimal,
        pub is_offer_item: bool,
    }

    pub enum Success {
        ItemAdded {
            session_token: Option<String>,
            item: AddedItem,
            totals: Totals,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ItemAdded {
                    session_token,
                    item,
                    totals,
                } => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "session_token": session_token,
                        "item": item,
                        "totals": totals,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidInput(ValidationErrors),
        FoodItemNotFound,
        ItemUnavailable,
        FailedToAddItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidInput(errors) => validation::into_response(errors).into_response(),
                Self::FoodItemNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "message": "Food item not found" })),
                )
                    .into_response(),
                Self::ItemUnavailable => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "message": "This item is currently unavailable" })),
                )
                    .into_response(),
                Self::FailedToAddItem => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Failed to add item to cart" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
