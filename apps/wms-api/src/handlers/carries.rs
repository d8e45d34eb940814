//! `/api/v1/carries` (read and create only)

use axum::extract::State;
use axum::routing::get;
use axum::Router;
use wms_core::Carry;

use super::{created, item_path, ok, path, ApiResult, Created, JsonData};
use crate::extract::{Id, JsonBody};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(&path("carries"), get(list).post(create))
        .route(&item_path("carries"), get(find))
}

async fn list(State(state): State<AppState>) -> ApiResult<JsonData<Vec<Carry>>> {
    Ok(ok(state.services.carries.get_all().await?))
}

async fn find(State(state): State<AppState>, Id(id): Id) -> ApiResult<JsonData<Carry>> {
    Ok(ok(state.services.carries.get_by_id(id).await?))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(carry): JsonBody<Carry>,
) -> ApiResult<Created<Carry>> {
    Ok(created(state.services.carries.save(carry).await?))
}
