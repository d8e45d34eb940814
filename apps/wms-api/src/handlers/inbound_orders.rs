//! `/api/v1/inbound-orders` (read and create only)

use axum::extract::State;
use axum::routing::get;
use axum::Router;
use wms_core::InboundOrder;

use super::{created, item_path, ok, path, ApiResult, Created, JsonData};
use crate::extract::{Id, JsonBody};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(&path("inbound-orders"), get(list).post(create))
        .route(&item_path("inbound-orders"), get(find))
}

async fn list(State(state): State<AppState>) -> ApiResult<JsonData<Vec<InboundOrder>>> {
    Ok(ok(state.services.inbound_orders.get_all().await?))
}

async fn find(State(state): State<AppState>, Id(id): Id) -> ApiResult<JsonData<InboundOrder>> {
    Ok(ok(state.services.inbound_orders.get_by_id(id).await?))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(order): JsonBody<InboundOrder>,
) -> ApiResult<Created<InboundOrder>> {
    Ok(created(state.services.inbound_orders.create(order).await?))
}
