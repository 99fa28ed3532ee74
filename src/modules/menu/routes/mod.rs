mod categories;
mod items;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(categories::get_router())
        .merge(items::get_router())
}
