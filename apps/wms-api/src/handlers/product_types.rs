//! `/api/v1/product-types`

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use wms_core::{ProductType, ProductTypePatch};

use super::{created, item_path, ok, path, ApiResult, Created, JsonData};
use crate::extract::{Id, JsonBody};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(&path("product-types"), get(list).post(create))
        .route(&item_path("product-types"), get(find).patch(update).delete(remove))
}

async fn list(State(state): State<AppState>) -> ApiResult<JsonData<Vec<ProductType>>> {
    Ok(ok(state.services.product_types.get_all().await?))
}

async fn find(State(state): State<AppState>, Id(id): Id) -> ApiResult<JsonData<ProductType>> {
    Ok(ok(state.services.product_types.get_by_id(id).await?))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(product_type): JsonBody<ProductType>,
) -> ApiResult<Created<ProductType>> {
    Ok(created(state.services.product_types.save(product_type).await?))
}

async fn update(
    State(state): State<AppState>,
    Id(id): Id,
    JsonBody(patch): JsonBody<ProductTypePatch>,
) -> ApiResult<JsonData<ProductType>> {
    Ok(ok(state.services.product_types.update(id, patch).await?))
}

async fn remove(State(state): State<AppState>, Id(id): Id) -> ApiResult<StatusCode> {
    state.services.product_types.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
