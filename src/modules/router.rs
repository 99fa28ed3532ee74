use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

use super::{auth, cart, contact, menu, offer, order, review, user};

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/auth", auth::routes::get_router())
        .nest("/users", user::routes::get_router())
        .nest("/menu", menu::routes::get_router())
        .nest("/offers", offer::routes::get_router())
        .nest("/cart", cart::routes::get_router())
        .nest("/orders", order::routes::get_router())
        .nest("/reviews", review::routes::get_router())
        .nest("/contact", contact::routes::get_router())
}
