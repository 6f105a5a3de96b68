//! # orderdesk-db: Database Layer for Order Desk
//!
//! This crate provides database access for the Order Desk system.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Order Desk Data Flow                             │
//! │                                                                         │
//! │  Form callback (place_order, check_inventory, ...)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   orderdesk-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (customer.rs) │    │  (embedded)  │  │   │
//! │  │   │               │    │ (product.rs)  │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ (order.rs)    │    │ 001_init.sql │  │   │
//! │  │   │ Connection    │    │ (report.rs)   │    │              │  │   │
//! │  │   │ Management    │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ./orderdesk.db (WAL mode, foreign keys ON)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//! - [`repository`] - Repository implementations (customer, product, order, report)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use orderdesk_db::{Database, DbConfig};
//!
//! // Create database with default config
//! let db = Database::new(DbConfig::new("path/to/orderdesk.db")).await?;
//!
//! // Use repositories
//! let customer_id = db.customers().register(&registration).await?;
//! let placed = db.orders().place_order(customer_id, &[3, 5]).await?;
//! let sales = db.reports().daily_sales("2026-08-07").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::order::{OrderRepository, PlacedOrder};
pub use repository::product::{InventoryReport, ProductFilter, ProductRepository};
pub use repository::report::{DailySales, OrderGroup, OrderHistory, ReportRepository};
