//! # Repository Module
//!
//! Database repository implementations for Order Desk.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Form callback                                                         │
//! │       │                                                                 │
//! │       │  db.orders().place_order(42, &[3, 5])                          │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  OrderRepository                                                       │
//! │  ├── place_order(&self, customer_id, product_ids)                      │
//! │  └── get_by_id(&self, id)                                              │
//! │       │                                                                 │
//! │       │  One transaction, statements in workflow order                  │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • SQL is isolated in one place                                        │
//! │  • Each operation owns its connection/transaction for its duration     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CustomerRepository`] - Customer registration and lookup
//! - [`ProductRepository`] - Inventory lookup and catalog maintenance
//! - [`OrderRepository`] - The transactional order-placement workflow
//! - [`ReportRepository`] - Daily sales and per-customer order history
//!
//! [`CustomerRepository`]: customer::CustomerRepository
//! [`ProductRepository`]: product::ProductRepository
//! [`OrderRepository`]: order::OrderRepository
//! [`ReportRepository`]: report::ReportRepository

pub mod customer;
pub mod order;
pub mod product;
pub mod report;

#[cfg(test)]
pub(crate) mod testutil {
    //! Shared fixtures for repository tests: an isolated in-memory store
    //! plus a small seeded catalog.

    use orderdesk_core::{CustomerRegistration, Product};

    use crate::pool::{Database, DbConfig};

    /// Fresh in-memory database with migrations applied.
    pub async fn test_db() -> Database {
        Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database")
    }

    /// A valid registration for "Alice Martin".
    pub fn alice() -> CustomerRegistration {
        CustomerRegistration {
            name: "Alice Martin".to_string(),
            date_of_birth: "1990-04-21".to_string(),
            email: "alice@example.com".to_string(),
            address: "12 Rue des Fleurs".to_string(),
            phone: "555-0100".to_string(),
        }
    }

    /// Seeds three products: two stocked, one sold out.
    pub async fn seed_catalog(db: &Database) {
        let products = [
            Product {
                id: 3,
                name: "Espresso Beans 1kg".to_string(),
                brand: "Roastery".to_string(),
                sku: "BEAN-1KG".to_string(),
                stock: 10,
                price_cents: 1899,
            },
            Product {
                id: 5,
                name: "Moka Pot".to_string(),
                brand: "Bialetti".to_string(),
                sku: "MOKA-6".to_string(),
                stock: 2,
                price_cents: 3450,
            },
            Product {
                id: 9,
                name: "Ceramic Mug".to_string(),
                brand: "Atelier".to_string(),
                sku: "MUG-CER".to_string(),
                stock: 0,
                price_cents: 1200,
            },
        ];

        for product in &products {
            db.products().insert(product).await.expect("seed product");
        }
    }
}
