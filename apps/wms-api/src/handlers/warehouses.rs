//! `/api/v1/warehouses`

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use wms_core::{Warehouse, WarehousePatch};

use super::{created, item_path, ok, path, ApiResult, Created, JsonData};
use crate::extract::{Id, JsonBody};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(&path("warehouses"), get(list).post(create))
        .route(&item_path("warehouses"), get(find).patch(update).delete(remove))
}

async fn list(State(state): State<AppState>) -> ApiResult<JsonData<Vec<Warehouse>>> {
    Ok(ok(state.services.warehouses.get_all().await?))
}

async fn find(State(state): State<AppState>, Id(id): Id) -> ApiResult<JsonData<Warehouse>> {
    Ok(ok(state.services.warehouses.get_by_id(id).await?))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(warehouse): JsonBody<Warehouse>,
) -> ApiResult<Created<Warehouse>> {
    Ok(created(state.services.warehouses.save(warehouse).await?))
}

async fn update(
    State(state): State<AppState>,
    Id(id): Id,
    JsonBody(patch): JsonBody<WarehousePatch>,
) -> ApiResult<JsonData<Warehouse>> {
    Ok(ok(state.services.warehouses.update(id, patch).await?))
}

async fn remove(State(state): State<AppState>, Id(id): Id) -> ApiResult<StatusCode> {
    state.services.warehouses.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
