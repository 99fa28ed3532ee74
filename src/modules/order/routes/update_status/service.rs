use super::types::{request, response};
use crate::modules::order::repository;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    if !payload.auth.user.is_staff {
        return Err(response::Error::Forbidden);
    }

    let order = repository::find_by_id(&ctx.db_conn.pool, payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateStatus)?
        .ok_or(response::Error::OrderNotFound)?;

    if !order.status.can_transition_to(&payload.body.status) {
        return Err(response::Error::InvalidTransition(
            order.status,
            payload.body.status,
        ));
    }

    repository::update_status_by_id(&ctx.db_conn.pool, payload.id, payload.body.status)
        .await
        .map_err(|_| response::Error::FailedToUpdateStatus)?
        .map(response::Success::StatusUpdated)
        .ok_or(response::Error::OrderNotFound)
}
