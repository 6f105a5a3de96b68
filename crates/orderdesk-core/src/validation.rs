//! # Validation Module
//!
//! Input validation utilities for Order Desk.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form layer (external caller)                                 │
//! │  ├── Parses text fields into primitives (ids, comma lists)             │
//! │  └── Immediate clerk feedback for empty inputs                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Calendar-date checks (YYYY-MM-DD, real dates only)                │
//! │  └── Required-field checks before any statement is issued              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── UNIQUE constraints (product SKU)                                  │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::error::{ValidationError, ValidationResult};
use crate::types::CustomerRegistration;

/// Parses a birth date in strict `YYYY-MM-DD` form.
///
/// ## Rules
/// - Must match `%Y-%m-%d` exactly (no time component, no slashes)
/// - Must be a real calendar date (`2023-02-30` is rejected)
///
/// ## Example
/// ```rust
/// use orderdesk_core::validation::parse_birth_date;
///
/// assert!(parse_birth_date("1990-04-21").is_ok());
/// assert!(parse_birth_date("21/04/1990").is_err());
/// assert!(parse_birth_date("1990-02-30").is_err());
/// ```
pub fn parse_birth_date(value: &str) -> ValidationResult<NaiveDate> {
    parse_date("date of birth", value)
}

/// Parses a report cutoff date, same rule as [`parse_birth_date`].
pub fn parse_report_date(value: &str) -> ValidationResult<NaiveDate> {
    parse_date("date", value)
}

fn parse_date(field: &str, value: &str) -> ValidationResult<NaiveDate> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ValidationError::invalid_date(field, value))
}

/// Validates a customer registration before it touches the store.
///
/// All five fields are required; the birth date must parse. Returns the
/// parsed date so the caller inserts a `NaiveDate`, not raw text.
pub fn validate_registration(reg: &CustomerRegistration) -> ValidationResult<NaiveDate> {
    require("name", &reg.name)?;
    let dob = parse_birth_date(&reg.date_of_birth)?;
    require("email", &reg.email)?;
    require("address", &reg.address)?;
    require("phone", &reg.phone)?;
    Ok(dob)
}

/// Validates the product list of an order request.
///
/// One entry per requested unit; an empty request is rejected before a
/// connection is ever acquired.
pub fn validate_order_request(product_ids: &[i64]) -> ValidationResult<()> {
    if product_ids.is_empty() {
        return Err(ValidationError::required("product ids"));
    }
    Ok(())
}

fn require(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> CustomerRegistration {
        CustomerRegistration {
            name: "Alice Martin".to_string(),
            date_of_birth: "1990-04-21".to_string(),
            email: "alice@example.com".to_string(),
            address: "12 Rue des Fleurs".to_string(),
            phone: "555-0100".to_string(),
        }
    }

    #[test]
    fn test_parse_birth_date() {
        assert_eq!(
            parse_birth_date("1990-04-21").unwrap(),
            NaiveDate::from_ymd_opt(1990, 4, 21).unwrap()
        );

        // Whitespace is tolerated, format deviations are not.
        assert!(parse_birth_date(" 1990-04-21 ").is_ok());
        assert!(parse_birth_date("").is_err());
        assert!(parse_birth_date("21/04/1990").is_err());
        assert!(parse_birth_date("1990-4-21x").is_err());
        assert!(parse_birth_date("1990-02-30").is_err());
    }

    #[test]
    fn test_validate_registration() {
        assert!(validate_registration(&registration()).is_ok());

        let mut reg = registration();
        reg.name = "  ".to_string();
        assert!(matches!(
            validate_registration(&reg),
            Err(ValidationError::Required { .. })
        ));

        let mut reg = registration();
        reg.date_of_birth = "yesterday".to_string();
        assert!(matches!(
            validate_registration(&reg),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_validate_order_request() {
        assert!(validate_order_request(&[3, 5, 3]).is_ok());
        assert!(validate_order_request(&[]).is_err());
    }
}
