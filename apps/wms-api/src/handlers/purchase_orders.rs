//! `/api/v1/purchase-orders` (read and create only)

use axum::extract::State;
use axum::routing::get;
use axum::Router;
use wms_core::PurchaseOrder;

use super::{created, item_path, ok, path, ApiResult, Created, JsonData};
use crate::extract::{Id, JsonBody};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(&path("purchase-orders"), get(list).post(create))
        .route(&item_path("purchase-orders"), get(find))
}

async fn list(State(state): State<AppState>) -> ApiResult<JsonData<Vec<PurchaseOrder>>> {
    Ok(ok(state.services.purchase_orders.get_all().await?))
}

async fn find(State(state): State<AppState>, Id(id): Id) -> ApiResult<JsonData<PurchaseOrder>> {
    Ok(ok(state.services.purchase_orders.get_by_id(id).await?))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(order): JsonBody<PurchaseOrder>,
) -> ApiResult<Created<PurchaseOrder>> {
    Ok(created(state.services.purchase_orders.create(order).await?))
}
