//! # Error Types
//!
//! Field-level validation errors for wms-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  wms-core       ValidationError  - a single field broke a rule         │
//! │  wms-db         DbError          - storage failures                    │
//! │  wms-service    ServiceError     - the taxonomy handlers map           │
//! │  wms-api        ApiError         - what HTTP clients see               │
//! │                                                                         │
//! │  Flow: ValidationError → ServiceError → ApiError → JSON body + status  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant carries the offending field name so the message reaching
//! the client names it.

use thiserror::Error;

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing, empty or zero.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value is below an inclusive lower bound.
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: f64 },

    /// Minimum capacity exceeds maximum capacity.
    #[error("minimum_capacity ({minimum}) cannot exceed maximum_capacity ({maximum})")]
    CapacityRange { minimum: i64, maximum: i64 },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g. a malformed date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    pub fn must_be_positive(field: impl Into<String>) -> Self {
        ValidationError::MustBePositive {
            field: field.into(),
        }
    }

    pub fn negative(field: impl Into<String>) -> Self {
        ValidationError::Negative {
            field: field.into(),
        }
    }

    pub fn below_minimum(field: impl Into<String>, min: f64) -> Self {
        ValidationError::BelowMinimum {
            field: field.into(),
            min,
        }
    }

    /// Returns true for the "missing value" family of failures.
    pub fn is_missing_value(&self) -> bool {
        matches!(self, ValidationError::Required { .. })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::required("warehouse_code").to_string(),
            "warehouse_code is required"
        );
        assert_eq!(
            ValidationError::below_minimum("current_temperature", -273.15).to_string(),
            "current_temperature must be at least -273.15"
        );

        let err = ValidationError::CapacityRange {
            minimum: 10,
            maximum: 4,
        };
        assert_eq!(
            err.to_string(),
            "minimum_capacity (10) cannot exceed maximum_capacity (4)"
        );
    }

    #[test]
    fn test_is_missing_value() {
        assert!(ValidationError::required("order_number").is_missing_value());
        assert!(!ValidationError::negative("current_quantity").is_missing_value());
    }
}
