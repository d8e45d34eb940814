//! # Service Error Types
//!
//! The error taxonomy every service returns and every handler maps.
//!
//! ## Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ServiceError            raised when                       HTTP        │
//! │  ─────────────────────   ─────────────────────────────     ─────       │
//! │  InvalidArguments        a field broke a rule, or a        422         │
//! │                          referenced entity is missing                  │
//! │  EmptyArguments          a purchase order lacks a value    422         │
//! │  Conflict                a business key is taken, or a     409         │
//! │                          batch references a missing row                │
//! │  NotFound                the addressed row is absent       404         │
//! │  BuyerDoesNotExist       purchase order / buyer report     422 / 404   │
//! │  WarehouseDoesNotExist   employee create / update          422         │
//! │  Storage                 anything the database reports     500 / 409   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use wms_core::ValidationError;
use wms_db::DbError;

/// Why a set of arguments was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgumentError {
    /// A single field broke a validation rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced entity does not exist.
    #[error("{entity} {id} does not exist")]
    UnknownReference { entity: &'static str, id: i64 },
}

/// Errors returned by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(#[from] ArgumentError),

    #[error("empty arguments: {0}")]
    EmptyArguments(ValidationError),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("buyer {0} does not exist")]
    BuyerDoesNotExist(i64),

    #[error("warehouse {0} does not exist")]
    WarehouseDoesNotExist(i64),

    #[error("storage error: {0}")]
    Storage(DbError),
}

impl ServiceError {
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        ServiceError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ServiceError::Conflict(message.into())
    }

    /// A referenced entity is missing; reported as invalid arguments.
    pub fn unknown_reference(entity: &'static str, id: i64) -> Self {
        ServiceError::InvalidArguments(ArgumentError::UnknownReference { entity, id })
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::InvalidArguments(ArgumentError::Validation(err))
    }
}

/// An update or delete that matched no row is a plain NotFound; everything
/// else stays a storage error.
impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ServiceError::NotFound { entity, id },
            other => ServiceError::Storage(other),
        }
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
