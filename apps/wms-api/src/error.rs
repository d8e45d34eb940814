//! # API Error Type
//!
//! What an HTTP client sees when a request fails.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  extractor rejection ──► ApiError { INVALID_FORMAT }           400     │
//! │                                                                         │
//! │  ServiceError ─────────► ApiError                                       │
//! │    InvalidArguments          INVALID_ARGUMENTS                  422     │
//! │    EmptyArguments            EMPTY_ARGUMENTS                    422     │
//! │    Conflict                  CONFLICT                           409     │
//! │    NotFound                  NOT_FOUND                          404     │
//! │    BuyerDoesNotExist         BUYER_DOES_NOT_EXIST               422     │
//! │    WarehouseDoesNotExist     WAREHOUSE_DOES_NOT_EXIST           422     │
//! │    Storage (constraint)      CONFLICT                           409     │
//! │    Storage (anything else)   INTERNAL                           500     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage failures are logged with their details; the client only gets a
//! generic message.
//!
//! ## Serialization
//! ```json
//! { "code": "NOT_FOUND", "message": "Section not found: 7" }
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};
use wms_service::ServiceError;

/// API error returned from every handler.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Body, path or query could not be decoded (400)
    InvalidFormat,

    /// A field broke a rule or references a missing entity (422)
    InvalidArguments,

    /// A purchase order is missing a value (422)
    EmptyArguments,

    /// Business key already taken (409)
    Conflict,

    /// Resource not found (404)
    NotFound,

    /// Purchase order names an unknown buyer (422)
    BuyerDoesNotExist,

    /// Employee names an unknown warehouse (422)
    WarehouseDoesNotExist,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
            ErrorCode::InvalidArguments
            | ErrorCode::EmptyArguments
            | ErrorCode::BuyerDoesNotExist
            | ErrorCode::WarehouseDoesNotExist => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidFormat, message)
    }

    pub fn internal() -> Self {
        ApiError::new(ErrorCode::Internal, "internal server error")
    }

    /// Report endpoints answer a missing buyer or warehouse with 404 rather
    /// than 422: the filter, not a body field, names it.
    pub fn from_report(err: ServiceError) -> Self {
        match err {
            ServiceError::BuyerDoesNotExist(_) | ServiceError::WarehouseDoesNotExist(_) => {
                ApiError::new(ErrorCode::NotFound, err.to_string())
            }
            other => other.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidArguments(e) => {
                ApiError::new(ErrorCode::InvalidArguments, e.to_string())
            }
            ServiceError::EmptyArguments(e) => {
                ApiError::new(ErrorCode::EmptyArguments, e.to_string())
            }
            ServiceError::Conflict(message) => ApiError::new(ErrorCode::Conflict, message),
            ServiceError::NotFound { entity, id } => {
                ApiError::new(ErrorCode::NotFound, format!("{entity} not found: {id}"))
            }
            ServiceError::BuyerDoesNotExist(_) => {
                ApiError::new(ErrorCode::BuyerDoesNotExist, err.to_string())
            }
            ServiceError::WarehouseDoesNotExist(_) => {
                ApiError::new(ErrorCode::WarehouseDoesNotExist, err.to_string())
            }
            ServiceError::Storage(db) if db.is_constraint_violation() => {
                warn!(error = %db, "Write rejected by a database constraint");
                ApiError::new(
                    ErrorCode::Conflict,
                    "request conflicts with existing data",
                )
            }
            ServiceError::Storage(db) => {
                error!(error = %db, "Database operation failed");
                ApiError::internal()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::invalid_format(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::invalid_format(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::invalid_format(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
