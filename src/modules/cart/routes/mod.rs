mod add_item;
mod checkout;
mod get;
mod remove_item;
mod update_item;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(get::get_router())
        .merge(add_item::get_router())
        .merge(update_item::get_router())
        .merge(remove_item::get_router())
        .merge(checkout::get_router())
}
