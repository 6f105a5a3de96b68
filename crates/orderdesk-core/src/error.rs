//! # Error Types
//!
//! Validation error types for orderdesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  orderdesk-core errors (this file)                                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  orderdesk-db errors (separate crate)                                  │
//! │  └── DbError          - Storage failures, missing rows, stock-outs     │
//! │                         (wraps ValidationError for one-stop handling)  │
//! │                                                                         │
//! │  Flow: ValidationError → DbError → caller renders Display message      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur before any statement is issued against the store:
/// a failed validation means nothing was written.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A date field is not a real calendar date in `YYYY-MM-DD` form.
    #[error("{field} has invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { field: String, value: String },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an InvalidDate error for the given field and raw value.
    pub fn invalid_date(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::InvalidDate {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::required("name");
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::invalid_date("date of birth", "1990-13-40");
        assert_eq!(
            err.to_string(),
            "date of birth has invalid date '1990-13-40': expected YYYY-MM-DD"
        );
    }
}
