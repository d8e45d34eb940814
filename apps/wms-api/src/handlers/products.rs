//! `/api/v1/products`

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use wms_core::{Product, ProductPatch, ProductRecordsReport};

use super::{created, item_path, ok, path, ApiResult, Created, JsonData};
use crate::extract::{Id, JsonBody, ReportFilter};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(&path("products"), get(list).post(create))
        .route(&path("products/report-records"), get(report_records))
        .route(&item_path("products"), get(find).patch(update).delete(remove))
}

async fn list(State(state): State<AppState>) -> ApiResult<JsonData<Vec<Product>>> {
    Ok(ok(state.services.products.get_all().await?))
}

async fn find(State(state): State<AppState>, Id(id): Id) -> ApiResult<JsonData<Product>> {
    Ok(ok(state.services.products.get_by_id(id).await?))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(product): JsonBody<Product>,
) -> ApiResult<Created<Product>> {
    Ok(created(state.services.products.save(product).await?))
}

async fn update(
    State(state): State<AppState>,
    Id(id): Id,
    JsonBody(patch): JsonBody<ProductPatch>,
) -> ApiResult<JsonData<Product>> {
    Ok(ok(state.services.products.update(id, patch).await?))
}

async fn remove(State(state): State<AppState>, Id(id): Id) -> ApiResult<StatusCode> {
    state.services.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn report_records(
    State(state): State<AppState>,
    ReportFilter(id): ReportFilter,
) -> ApiResult<JsonData<Vec<ProductRecordsReport>>> {
    Ok(ok(state.services.products.records_report(id).await?))
}
