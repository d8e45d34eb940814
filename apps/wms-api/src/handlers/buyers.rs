//! `/api/v1/buyers`

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use wms_core::{Buyer, BuyerPatch, BuyerPurchaseOrdersReport};

use super::{created, item_path, ok, path, ApiResult, Created, JsonData};
use crate::error::ApiError;
use crate::extract::{Id, JsonBody, ReportFilter};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(&path("buyers"), get(list).post(create))
        .route(&path("buyers/report-purchase-orders"), get(report_purchase_orders))
        .route(&item_path("buyers"), get(find).patch(update).delete(remove))
}

async fn list(State(state): State<AppState>) -> ApiResult<JsonData<Vec<Buyer>>> {
    Ok(ok(state.services.buyers.get_all().await?))
}

async fn find(State(state): State<AppState>, Id(id): Id) -> ApiResult<JsonData<Buyer>> {
    Ok(ok(state.services.buyers.get_by_id(id).await?))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(buyer): JsonBody<Buyer>,
) -> ApiResult<Created<Buyer>> {
    Ok(created(state.services.buyers.save(buyer).await?))
}

async fn update(
    State(state): State<AppState>,
    Id(id): Id,
    JsonBody(patch): JsonBody<BuyerPatch>,
) -> ApiResult<JsonData<Buyer>> {
    Ok(ok(state.services.buyers.update(id, patch).await?))
}

async fn remove(State(state): State<AppState>, Id(id): Id) -> ApiResult<StatusCode> {
    state.services.buyers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn report_purchase_orders(
    State(state): State<AppState>,
    ReportFilter(id): ReportFilter,
) -> ApiResult<JsonData<Vec<BuyerPurchaseOrdersReport>>> {
    let report = state
        .services
        .purchase_orders
        .find_all_by_buyer_id(id)
        .await
        .map_err(ApiError::from_report)?;
    Ok(ok(report))
}
