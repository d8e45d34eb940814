//! `/api/v1/employees`

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use wms_core::{Employee, EmployeeInboundOrdersReport, EmployeePatch};

use super::{created, item_path, ok, path, ApiResult, Created, JsonData};
use crate::extract::{Id, JsonBody, ReportFilter};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(&path("employees"), get(list).post(create))
        .route(&path("employees/report-inbound-orders"), get(report_inbound_orders))
        .route(&item_path("employees"), get(find).patch(update).delete(remove))
}

async fn list(State(state): State<AppState>) -> ApiResult<JsonData<Vec<Employee>>> {
    Ok(ok(state.services.employees.get_all().await?))
}

async fn find(State(state): State<AppState>, Id(id): Id) -> ApiResult<JsonData<Employee>> {
    Ok(ok(state.services.employees.get_by_id(id).await?))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(employee): JsonBody<Employee>,
) -> ApiResult<Created<Employee>> {
    Ok(created(state.services.employees.save(employee).await?))
}

async fn update(
    State(state): State<AppState>,
    Id(id): Id,
    JsonBody(patch): JsonBody<EmployeePatch>,
) -> ApiResult<JsonData<Employee>> {
    Ok(ok(state.services.employees.update(id, patch).await?))
}

async fn remove(State(state): State<AppState>, Id(id): Id) -> ApiResult<StatusCode> {
    state.services.employees.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn report_inbound_orders(
    State(state): State<AppState>,
    ReportFilter(id): ReportFilter,
) -> ApiResult<JsonData<Vec<EmployeeInboundOrdersReport>>> {
    Ok(ok(state.services.inbound_orders.inbound_orders_report(id).await?))
}
