//! `/api/v1/product-records` (read and create only)

use axum::extract::State;
use axum::routing::get;
use axum::Router;
use wms_core::ProductRecord;

use super::{created, item_path, ok, path, ApiResult, Created, JsonData};
use crate::extract::{Id, JsonBody};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(&path("product-records"), get(list).post(create))
        .route(&item_path("product-records"), get(find))
}

async fn list(State(state): State<AppState>) -> ApiResult<JsonData<Vec<ProductRecord>>> {
    Ok(ok(state.services.product_records.get_all().await?))
}

async fn find(State(state): State<AppState>, Id(id): Id) -> ApiResult<JsonData<ProductRecord>> {
    Ok(ok(state.services.product_records.get_by_id(id).await?))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(record): JsonBody<ProductRecord>,
) -> ApiResult<Created<ProductRecord>> {
    Ok(created(state.services.product_records.save(record).await?))
}
