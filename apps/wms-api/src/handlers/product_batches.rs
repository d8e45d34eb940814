//! `/api/v1/product-batches` (read and create only)

use axum::extract::State;
use axum::routing::get;
use axum::Router;
use wms_core::ProductBatch;

use super::{created, item_path, ok, path, ApiResult, Created, JsonData};
use crate::extract::{Id, JsonBody};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(&path("product-batches"), get(list).post(create))
        .route(&item_path("product-batches"), get(find))
}

async fn list(State(state): State<AppState>) -> ApiResult<JsonData<Vec<ProductBatch>>> {
    Ok(ok(state.services.product_batches.get_all().await?))
}

async fn find(State(state): State<AppState>, Id(id): Id) -> ApiResult<JsonData<ProductBatch>> {
    Ok(ok(state.services.product_batches.get_by_id(id).await?))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(batch): JsonBody<ProductBatch>,
) -> ApiResult<Created<ProductBatch>> {
    Ok(created(state.services.product_batches.save(batch).await?))
}
