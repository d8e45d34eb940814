//! `/api/v1/localities`, plus the read-only `/provinces` and `/countries`
//! listings. Localities are created with their province and country names;
//! there is no update or delete.

use axum::extract::State;
use axum::routing::get;
use axum::Router;
use wms_core::{
    Country, Locality, LocalityCarriesReport, LocalityInput, LocalitySellersReport, Province,
};

use super::{created, item_path, ok, path, ApiResult, Created, JsonData};
use crate::extract::{Id, JsonBody, ReportFilter};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(&path("localities"), get(list).post(create))
        .route(&path("localities/report-sellers"), get(report_sellers))
        .route(&path("localities/report-carries"), get(report_carries))
        .route(&item_path("localities"), get(find))
        .route(&path("provinces"), get(list_provinces))
        .route(&path("countries"), get(list_countries))
}

async fn list(State(state): State<AppState>) -> ApiResult<JsonData<Vec<Locality>>> {
    Ok(ok(state.services.localities.get_all().await?))
}

async fn find(State(state): State<AppState>, Id(id): Id) -> ApiResult<JsonData<Locality>> {
    Ok(ok(state.services.localities.get_by_id(id).await?))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LocalityInput>,
) -> ApiResult<Created<Locality>> {
    Ok(created(state.services.localities.save(input).await?))
}

async fn report_sellers(
    State(state): State<AppState>,
    ReportFilter(id): ReportFilter,
) -> ApiResult<JsonData<Vec<LocalitySellersReport>>> {
    Ok(ok(state.services.localities.sellers_report(id).await?))
}

async fn report_carries(
    State(state): State<AppState>,
    ReportFilter(id): ReportFilter,
) -> ApiResult<JsonData<Vec<LocalityCarriesReport>>> {
    Ok(ok(state.services.localities.carries_report(id).await?))
}

async fn list_provinces(State(state): State<AppState>) -> ApiResult<JsonData<Vec<Province>>> {
    Ok(ok(state.services.localities.list_provinces().await?))
}

async fn list_countries(State(state): State<AppState>) -> ApiResult<JsonData<Vec<Country>>> {
    Ok(ok(state.services.localities.list_countries().await?))
}
