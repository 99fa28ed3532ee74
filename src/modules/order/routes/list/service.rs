use super::types::{request, response};
use crate::modules::order::repository;
use crate::types::Context;
use crate::utils::pagination::Paginated;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let orders = repository::find_many_by_user_id(
        &ctx.db_conn.pool,
        payload.auth.user.id.clone(),
        payload.pagination.limit(),
        payload.pagination.offset(),
    )
    .await
    .map_err(|_| response::Error::FailedToFetchOrders)?;

    let total = repository::count_by_user_id(&ctx.db_conn.pool, payload.auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchOrders)?;

    Ok(response::Success::Orders(Paginated::new(
        orders,
        total,
        payload.pagination.page,
        payload.pagination.per_page,
    )))
}
