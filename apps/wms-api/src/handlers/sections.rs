//! `/api/v1/sections`

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tracing::debug;
use wms_core::{Section, SectionPatch, SectionProductsReport};

use super::{created, item_path, ok, path, ApiResult, Created, JsonData};
use crate::extract::{Id, JsonBody, ReportFilter};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(&path("sections"), get(list).post(create))
        .route(&path("sections/report-products"), get(report_products))
        .route(&item_path("sections"), get(find).patch(update).delete(remove))
}

async fn list(State(state): State<AppState>) -> ApiResult<JsonData<Vec<Section>>> {
    Ok(ok(state.services.sections.get_all().await?))
}

async fn find(State(state): State<AppState>, Id(id): Id) -> ApiResult<JsonData<Section>> {
    Ok(ok(state.services.sections.get_by_id(id).await?))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(section): JsonBody<Section>,
) -> ApiResult<Created<Section>> {
    debug!(section_number = section.section_number, "Creating section");
    Ok(created(state.services.sections.save(section).await?))
}

async fn update(
    State(state): State<AppState>,
    Id(id): Id,
    JsonBody(patch): JsonBody<SectionPatch>,
) -> ApiResult<JsonData<Section>> {
    Ok(ok(state.services.sections.update(id, patch).await?))
}

async fn remove(State(state): State<AppState>, Id(id): Id) -> ApiResult<StatusCode> {
    state.services.sections.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Units in stock per section.
async fn report_products(
    State(state): State<AppState>,
    ReportFilter(id): ReportFilter,
) -> ApiResult<JsonData<Vec<SectionProductsReport>>> {
    Ok(ok(state.services.product_batches.products_by_section(id).await?))
}
