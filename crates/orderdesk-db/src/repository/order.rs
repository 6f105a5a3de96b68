//! # Order Repository
//!
//! The transactional order-placement workflow.
//!
//! ## Order Placement
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      place_order(customer, [p1, p2, ...])               │
//! │                                                                         │
//! │  BEGIN TRANSACTION (one connection for the whole workflow)             │
//! │                                                                         │
//! │  1. CUSTOMER CHECK                                                     │
//! │     └── missing ──────────────────────────────► NotFound, rollback     │
//! │                                                                         │
//! │  2. PRODUCT VALIDATION (every entry, before any write)                 │
//! │     ├── missing ──────────────────────────────► NotFound, rollback     │
//! │     ├── stock = 0 ────────────────────────────► OutOfStock, rollback   │
//! │     └── price captured into snapshot map                               │
//! │                                                                         │
//! │  3. ORDER HEADER                                                       │
//! │     └── id = max(MAX(existing), 200) + 1, dated today                  │
//! │                                                                         │
//! │  4. LINES (input order)                                                │
//! │     └── per entry: INSERT line @ snapshot price, stock = stock - 1     │
//! │                                                                         │
//! │  5. COMMIT ──► order id + confirmation message                         │
//! │                                                                         │
//! │  Any failure in 1-4 drops the transaction: every prior write rolls     │
//! │  back, no order id escapes, no stock changes.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use orderdesk_core::{validation, Order, OrderLine, ORDER_ID_FLOOR};

/// Outcome of a successful order placement.
///
/// Carries the free-text confirmation the form layer displays; the ids are
/// there for callers that want to render something richer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub order_id: i64,
    pub customer_id: i64,
    pub order_date: NaiveDate,
    pub message: String,
}

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Places an order for a customer, decrementing stock.
    ///
    /// `product_ids` carries one entry per requested unit, in the clerk's
    /// input order; the same product appearing twice yields two lines and
    /// two stock decrements.
    ///
    /// ## Atomicity
    /// The whole workflow runs in one transaction on one connection.
    /// Errors propagate with `?`, which drops the transaction and rolls
    /// back every prior write.
    ///
    /// ## Stock Check
    /// Validation requires `stock > 0` per entry lookup; it does not sum
    /// duplicate entries against available stock. The later decrement is
    /// unconditional.
    pub async fn place_order(&self, customer_id: i64, product_ids: &[i64]) -> DbResult<PlacedOrder> {
        validation::validate_order_request(product_ids)?;

        debug!(customer_id, units = product_ids.len(), "Placing order");

        let mut tx = self.pool.begin().await?;

        // 1. Verify the customer exists.
        let known: Option<i64> = sqlx::query_scalar("SELECT id FROM customers WHERE id = ?1")
            .bind(customer_id)
            .fetch_optional(&mut *tx)
            .await?;

        if known.is_none() {
            return Err(DbError::not_found("Customer", customer_id));
        }

        // 2. Verify every requested product and snapshot unit prices,
        //    keyed by product id. No write has happened yet.
        let mut price_snapshot: HashMap<i64, i64> = HashMap::new();
        for &product_id in product_ids {
            let row: Option<(String, i64, i64)> =
                sqlx::query_as("SELECT name, stock, price_cents FROM products WHERE id = ?1")
                    .bind(product_id)
                    .fetch_optional(&mut *tx)
                    .await?;

            let (name, stock, price_cents) =
                row.ok_or_else(|| DbError::not_found("Product", product_id))?;

            if stock <= 0 {
                return Err(DbError::out_of_stock(name, product_id));
            }

            price_snapshot.insert(product_id, price_cents);
        }

        // 3. Create the order header. The id read and the row write are one
        //    statement, so no other writer can slip between them.
        let order_date = Utc::now().date_naive();

        let order_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (id, customer_id, order_date)
            VALUES (
                MAX((SELECT COALESCE(MAX(id), 0) FROM orders), ?1) + 1,
                ?2, ?3
            )
            RETURNING id
            "#,
        )
        .bind(ORDER_ID_FLOOR)
        .bind(customer_id)
        .bind(order_date)
        .fetch_one(&mut *tx)
        .await?;

        // 4. One line per requested unit, in input order, at the snapshot
        //    price; then decrement that product's stock by exactly 1.
        for &product_id in product_ids {
            // Every id was inserted into the snapshot in step 2.
            let price_cents = price_snapshot[&product_id];

            sqlx::query(
                r#"
                INSERT INTO order_lines (order_id, product_id, price_cents)
                VALUES (?1, ?2, ?3)
                "#,
            )
            .bind(order_id)
            .bind(product_id)
            .bind(price_cents)
            .execute(&mut *tx)
            .await?;

            sqlx::query("UPDATE products SET stock = stock - 1 WHERE id = ?1")
                .bind(product_id)
                .execute(&mut *tx)
                .await?;
        }

        // 5. Commit. Only now does the order become visible.
        tx.commit().await?;

        info!(order_id, customer_id, units = product_ids.len(), "Order placed");

        Ok(PlacedOrder {
            order_id,
            customer_id,
            order_date,
            message: format!("Order {order_id} placed successfully for customer {customer_id}."),
        })
    }

    /// Gets an order header by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer_id, order_date
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Gets all lines for an order, in insertion order.
    pub async fn get_lines(&self, order_id: i64) -> DbResult<Vec<OrderLine>> {
        let lines = sqlx::query_as::<_, OrderLine>(
            r#"
            SELECT order_id, product_id, price_cents
            FROM order_lines
            WHERE order_id = ?1
            ORDER BY rowid
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lines)
    }

    /// Counts order headers (for diagnostics and rollback assertions).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
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
    use crate::repository::testutil::{alice, seed_catalog, test_db};
    use orderdesk_core::ValidationError;

    async fn stock_of(db: &crate::pool::Database, id: i64) -> i64 {
        db.products().get_by_id(id).await.unwrap().unwrap().stock
    }

    #[tokio::test]
    async fn successful_order_creates_header_lines_and_decrements_stock() {
        let db = test_db().await;
        seed_catalog(&db).await;
        let customer_id = db.customers().register(&alice()).await.unwrap();

        let placed = db.orders().place_order(customer_id, &[3, 5]).await.unwrap();

        // First order id sits just above the floor.
        assert_eq!(placed.order_id, ORDER_ID_FLOOR + 1);
        assert_eq!(placed.customer_id, customer_id);
        assert_eq!(
            placed.message,
            format!("Order 201 placed successfully for customer {customer_id}.")
        );

        let header = db.orders().get_by_id(201).await.unwrap().unwrap();
        assert_eq!(header.customer_id, customer_id);
        assert_eq!(header.order_date, Utc::now().date_naive());

        // One line per requested unit, snapshot prices, input order.
        let lines = db.orders().get_lines(201).await.unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product_id, 3);
        assert_eq!(lines[0].price_cents, 1899);
        assert_eq!(lines[1].product_id, 5);
        assert_eq!(lines[1].price_cents, 3450);

        assert_eq!(stock_of(&db, 3).await, 9);
        assert_eq!(stock_of(&db, 5).await, 1);

        // Ids keep climbing from the current maximum.
        let next = db.orders().place_order(customer_id, &[3]).await.unwrap();
        assert_eq!(next.order_id, 202);
    }

    #[tokio::test]
    async fn missing_customer_rolls_back_everything() {
        let db = test_db().await;
        seed_catalog(&db).await;

        let err = db.orders().place_order(99, &[3]).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { ref entity, .. } if entity == "Customer"));

        assert_eq!(db.orders().count().await.unwrap(), 0);
        assert_eq!(stock_of(&db, 3).await, 10);
    }

    #[tokio::test]
    async fn missing_product_rolls_back_everything() {
        let db = test_db().await;
        seed_catalog(&db).await;
        let customer_id = db.customers().register(&alice()).await.unwrap();

        let err = db
            .orders()
            .place_order(customer_id, &[3, 404])
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { ref entity, .. } if entity == "Product"));

        assert_eq!(db.orders().count().await.unwrap(), 0);
        assert_eq!(stock_of(&db, 3).await, 10);
    }

    #[tokio::test]
    async fn out_of_stock_product_rolls_back_everything() {
        let db = test_db().await;
        seed_catalog(&db).await;
        let customer_id = db.customers().register(&alice()).await.unwrap();

        // Product 9 is seeded sold out; product 3 is fine but must not leak.
        let err = db
            .orders()
            .place_order(customer_id, &[3, 9])
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::OutOfStock { id: 9, .. }));

        assert_eq!(db.orders().count().await.unwrap(), 0);
        assert_eq!(stock_of(&db, 3).await, 10);
        assert_eq!(stock_of(&db, 9).await, 0);
    }

    #[tokio::test]
    async fn empty_request_is_rejected_before_touching_the_store() {
        let db = test_db().await;
        seed_catalog(&db).await;
        let customer_id = db.customers().register(&alice()).await.unwrap();

        let err = db.orders().place_order(customer_id, &[]).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::Validation(ValidationError::Required { .. })
        ));
        assert_eq!(db.orders().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn duplicate_entries_are_not_summed_against_stock() {
        // Documents the permissive behavior: validation checks stock > 0
        // per entry lookup, so three units of a 2-in-stock product pass
        // validation and the unconditional decrements drive stock to -1.
        let db = test_db().await;
        seed_catalog(&db).await;
        let customer_id = db.customers().register(&alice()).await.unwrap();

        let placed = db
            .orders()
            .place_order(customer_id, &[5, 5, 5])
            .await
            .unwrap();

        let lines = db.orders().get_lines(placed.order_id).await.unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(stock_of(&db, 5).await, -1);
    }
}
