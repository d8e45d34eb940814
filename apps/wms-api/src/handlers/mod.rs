//! # HTTP Handlers
//!
//! One module per resource. Every module exposes `routes()`, and every
//! handler follows the same shape: decode, call one service operation,
//! wrap the result.
//!
//! ## Responses
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET    /api/v1/<resource>         200  {"data": [ ... ]}               │
//! │  GET    /api/v1/<resource>/{id}    200  {"data": { ... }}               │
//! │  POST   /api/v1/<resource>         201  {"data": { ... }}               │
//! │  PATCH  /api/v1/<resource>/{id}    200  {"data": { ... }}               │
//! │  DELETE /api/v1/<resource>/{id}    204  (empty body)                    │
//! │                                                                         │
//! │  failure                     4xx/5xx  {"code": "...", "message": "..."} │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod buyers;
pub mod carries;
pub mod employees;
pub mod health;
pub mod inbound_orders;
pub mod localities;
pub mod product_batches;
pub mod product_records;
pub mod product_types;
pub mod products;
pub mod purchase_orders;
pub mod sections;
pub mod sellers;
pub mod warehouses;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;

/// Prefix shared by every resource route.
pub const API_PREFIX: &str = "/api/v1";

pub type ApiResult<T> = Result<T, ApiError>;

/// Success envelope.
#[derive(Debug, Serialize)]
pub struct Data<T> {
    pub data: T,
}

pub type JsonData<T> = Json<Data<T>>;
pub type Created<T> = (StatusCode, Json<Data<T>>);

pub fn ok<T: Serialize>(data: T) -> JsonData<T> {
    Json(Data { data })
}

pub fn created<T: Serialize>(data: T) -> Created<T> {
    (StatusCode::CREATED, Json(Data { data }))
}

pub(crate) fn path(resource: &str) -> String {
    format!("{API_PREFIX}/{resource}")
}

pub(crate) fn item_path(resource: &str) -> String {
    format!("{API_PREFIX}/{resource}/{{id}}")
}
