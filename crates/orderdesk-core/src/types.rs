//! # Domain Types
//!
//! Core domain types used throughout Order Desk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │     Product     │   │      Order      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64)       │   │  id (i64)       │       │
//! │  │  name           │   │  sku (business) │   │  customer_id    │       │
//! │  │  date_of_birth  │   │  stock          │   │  order_date     │       │
//! │  │  email/address/ │   │  price_cents    │   └────────┬────────┘       │
//! │  │  phone          │   └─────────────────┘            │                │
//! │  └─────────────────┘                         ┌────────▼────────┐       │
//! │                                              │    OrderLine    │       │
//! │                                              │  ─────────────  │       │
//! │                                              │  order_id (FK)  │       │
//! │                                              │  product_id(FK) │       │
//! │                                              │  price snapshot │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are plain integers assigned by the registry as `MAX + 1` at creation
//! time. They are monotonic and gap-tolerant; deleted ids are never reused.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Customer
// =============================================================================

/// A registered customer.
///
/// Created once by [`CustomerRegistration`]; never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    /// Registry-assigned identifier (`MAX(id) + 1` at registration time).
    pub id: i64,

    /// Full name as entered at the desk.
    pub name: String,

    /// Birth date, validated as a real calendar date on the way in.
    pub date_of_birth: NaiveDate,

    /// Contact email. Not unique: two registrations with the same email
    /// produce two distinct customers.
    pub email: String,

    /// Postal address.
    pub address: String,

    /// Phone number, stored verbatim.
    pub phone: String,
}

/// Input for registering a new customer.
///
/// Field values arrive from the form layer as already-parsed strings; the
/// birth date is still raw text here because validating it is the registry's
/// job, not the form's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRegistration {
    pub name: String,
    /// Raw `YYYY-MM-DD` text, validated by [`crate::validation::parse_birth_date`].
    pub date_of_birth: String,
    pub email: String,
    pub address: String,
    pub phone: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Rows pre-exist (seeded or imported); the order workflow is the only
/// code path in this system that mutates one, and only by decrementing
/// `stock`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,

    /// Display name shown in inventory reports and order history.
    pub name: String,

    pub brand: String,

    /// Stock Keeping Unit - business identifier, unique in the catalog.
    pub sku: String,

    /// Units on hand. Never driven negative by this system's own operations.
    pub stock: i64,

    /// Unit price in cents.
    pub price_cents: i64,
}

impl Product {
    /// Unit price as [`Money`].
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Whether at least one unit can be sold right now.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Order & OrderLine
// =============================================================================

/// An order header. Created atomically with its lines; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    /// Assigned as `max(highest existing id, ORDER_ID_FLOOR) + 1`.
    pub id: i64,

    pub customer_id: i64,

    /// Calendar date the order was placed ("today" at creation).
    pub order_date: NaiveDate,
}

/// One row per requested unit of a product.
///
/// `price_cents` is a snapshot of the product's price at order time.
/// Requesting the same product twice in one order produces two lines
/// (and two stock decrements).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderLine {
    pub order_id: i64,
    pub product_id: i64,
    pub price_cents: i64,
}

impl OrderLine {
    /// Snapshot price as [`Money`].
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_price_and_stock() {
        let p = Product {
            id: 1,
            name: "Espresso Beans 1kg".to_string(),
            brand: "Roastery".to_string(),
            sku: "BEAN-1KG".to_string(),
            stock: 3,
            price_cents: 1899,
        };
        assert_eq!(p.price(), Money::from_cents(1899));
        assert!(p.in_stock());

        let empty = Product { stock: 0, ..p };
        assert!(!empty.in_stock());
    }
}
