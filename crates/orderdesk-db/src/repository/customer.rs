//! # Customer Repository
//!
//! Database operations for customer registration and lookup.
//!
//! ## Registration Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Customer Registration                               │
//! │                                                                         │
//! │  register(reg)                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_registration ── bad date / empty field ──► ValidationError   │
//! │       │                    (nothing written)                            │
//! │       ▼                                                                 │
//! │  INSERT id = (SELECT COALESCE(MAX(id), 0) + 1 FROM customers)          │
//! │  RETURNING id                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  New customer id                                                       │
//! │                                                                         │
//! │  The MAX-and-insert is ONE statement, so the id read and the row       │
//! │  write cannot interleave with another writer.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use orderdesk_core::{validation, Customer, CustomerRegistration};

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Registers a new customer and returns the assigned id.
    ///
    /// ## Id Assignment
    /// `MAX(existing id, 0) + 1`, computed inside the insert itself so the
    /// read and the write are a single atomic statement.
    ///
    /// ## Not Idempotent
    /// Two identical registrations create two distinct customers; there is
    /// no uniqueness rule on name or email.
    ///
    /// ## Returns
    /// * `Ok(id)` - Row committed, id assigned
    /// * `Err(DbError::Validation)` - Bad birth date or empty field, nothing written
    /// * `Err(_)` - Persistence failure, nothing written
    pub async fn register(&self, reg: &CustomerRegistration) -> DbResult<i64> {
        let date_of_birth = validation::validate_registration(reg)?;

        debug!(name = %reg.name, "Registering customer");

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO customers (id, name, date_of_birth, email, address, phone)
            VALUES (
                (SELECT COALESCE(MAX(id), 0) + 1 FROM customers),
                ?1, ?2, ?3, ?4, ?5
            )
            RETURNING id
            "#,
        )
        .bind(&reg.name)
        .bind(date_of_birth)
        .bind(&reg.email)
        .bind(&reg.address)
        .bind(&reg.phone)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = id, "Customer registered");
        Ok(id)
    }

    /// Gets a customer by id.
    ///
    /// ## Returns
    /// * `Ok(Some(Customer))` - Customer found
    /// * `Ok(None)` - No such customer
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, date_of_birth, email, address, phone
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Counts registered customers (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::repository::testutil::{alice, test_db};
    use chrono::NaiveDate;

    #[tokio::test]
    async fn register_assigns_sequential_ids_and_round_trips_fields() {
        let db = test_db().await;

        let id = db.customers().register(&alice()).await.unwrap();
        assert_eq!(id, 1);

        let stored = db.customers().get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Alice Martin");
        assert_eq!(
            stored.date_of_birth,
            NaiveDate::from_ymd_opt(1990, 4, 21).unwrap()
        );
        assert_eq!(stored.email, "alice@example.com");
        assert_eq!(stored.address, "12 Rue des Fleurs");
        assert_eq!(stored.phone, "555-0100");

        let mut bob = alice();
        bob.name = "Bob Osei".to_string();
        assert_eq!(db.customers().register(&bob).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn duplicate_registration_creates_two_distinct_customers() {
        // Duplicates are permitted: no uniqueness rule on name or email.
        let db = test_db().await;

        let first = db.customers().register(&alice()).await.unwrap();
        let second = db.customers().register(&alice()).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(db.customers().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn bad_birth_date_writes_nothing() {
        let db = test_db().await;

        let mut reg = alice();
        reg.date_of_birth = "1990-13-01".to_string();

        let err = db.customers().register(&reg).await.unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
        assert_eq!(db.customers().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn get_by_id_returns_none_for_unknown_customer() {
        let db = test_db().await;
        assert!(db.customers().get_by_id(99).await.unwrap().is_none());
    }
}
