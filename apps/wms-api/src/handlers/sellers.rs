//! `/api/v1/sellers`

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use wms_core::{Seller, SellerPatch};

use super::{created, item_path, ok, path, ApiResult, Created, JsonData};
use crate::extract::{Id, JsonBody};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(&path("sellers"), get(list).post(create))
        .route(&item_path("sellers"), get(find).patch(update).delete(remove))
}

async fn list(State(state): State<AppState>) -> ApiResult<JsonData<Vec<Seller>>> {
    Ok(ok(state.services.sellers.get_all().await?))
}

async fn find(State(state): State<AppState>, Id(id): Id) -> ApiResult<JsonData<Seller>> {
    Ok(ok(state.services.sellers.get_by_id(id).await?))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(seller): JsonBody<Seller>,
) -> ApiResult<Created<Seller>> {
    Ok(created(state.services.sellers.save(seller).await?))
}

async fn update(
    State(state): State<AppState>,
    Id(id): Id,
    JsonBody(patch): JsonBody<SellerPatch>,
) -> ApiResult<JsonData<Seller>> {
    Ok(ok(state.services.sellers.update(id, patch).await?))
}

async fn remove(State(state): State<AppState>, Id(id): Id) -> ApiResult<StatusCode> {
    state.services.sellers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
