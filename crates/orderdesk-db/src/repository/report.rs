//! # Report Repository
//!
//! Read-only reporting queries: daily sales totals and per-customer order
//! history.
//!
//! ## Shape of the History Payload
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  customer_order_history(42)                                             │
//! │                                                                         │
//! │  OrderHistory                                                           │
//! │  ├── customer 42 "Alice Martin"                                         │
//! │  └── orders (date DESC, then order id ASC)                              │
//! │      ├── OrderGroup #205  2026-08-07                                    │
//! │      │   ├── "Espresso Beans 1kg"  Roastery  $18.99                     │
//! │      │   └── "Moka Pot"            Bialetti  $34.50                     │
//! │      └── OrderGroup #201  2026-08-01                                    │
//! │          └── "Ceramic Mug"         Atelier   $12.00                     │
//! │                                                                         │
//! │  Lines within a group are sorted by product name. The grouping is a    │
//! │  Vec, not a map: iteration order IS the contract.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use orderdesk_core::{validation, Money};

// =============================================================================
// Payloads
// =============================================================================

/// Total sales for one calendar date.
#[derive(Debug, Clone, Serialize)]
pub struct DailySales {
    pub date: NaiveDate,
    /// Sum of line snapshot prices for orders placed on `date`.
    /// Zero when nothing was sold; that is a result, not an error.
    pub total: Money,
    pub message: String,
}

/// One line item inside an order history group.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryLine {
    pub product: String,
    pub brand: String,
    /// Price the unit actually sold at (the order-time snapshot).
    pub price: Money,
}

/// All lines of one order, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderGroup {
    pub order_id: i64,
    pub order_date: NaiveDate,
    pub lines: Vec<HistoryLine>,
}

/// A customer's full order history, grouped by order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderHistory {
    pub customer_id: i64,
    pub customer_name: String,
    /// Groups ordered by order date descending, then order id ascending.
    /// Empty when the customer has never ordered; that is a result, not an
    /// error.
    pub orders: Vec<OrderGroup>,
    pub message: String,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for reporting queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Sums all sales for the given `YYYY-MM-DD` date.
    ///
    /// The date is validated with the same rule as a birth date; a day with
    /// no orders yields a `$0.00` total and a "no sales" message.
    pub async fn daily_sales(&self, date: &str) -> DbResult<DailySales> {
        let date = validation::parse_report_date(date)?;

        debug!(%date, "Daily sales report");

        let total_cents: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT SUM(l.price_cents)
            FROM order_lines l
            JOIN orders o ON l.order_id = o.id
            WHERE o.order_date = ?1
            "#,
        )
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        let report = match total_cents {
            Some(cents) => {
                let total = Money::from_cents(cents);
                DailySales {
                    date,
                    total,
                    message: format!("Total sales for {date}: {total}"),
                }
            }
            None => DailySales {
                date,
                total: Money::ZERO,
                message: format!("No sales recorded for {date}."),
            },
        };

        Ok(report)
    }

    /// Retrieves a customer's order history, grouped by order.
    ///
    /// ## Ordering
    /// Order date descending, then order id ascending, then product name
    /// ascending within each order. The row order of the single query is
    /// preserved verbatim by the grouping pass.
    ///
    /// ## Returns
    /// * `Ok(OrderHistory)` - possibly with an empty `orders` vec
    /// * `Err(DbError::NotFound)` - unknown customer id
    pub async fn customer_order_history(&self, customer_id: i64) -> DbResult<OrderHistory> {
        debug!(customer_id, "Order history report");

        let customer_name: Option<String> =
            sqlx::query_scalar("SELECT name FROM customers WHERE id = ?1")
                .bind(customer_id)
                .fetch_optional(&self.pool)
                .await?;

        let customer_name = customer_name.ok_or_else(|| DbError::not_found("Customer", customer_id))?;

        let rows: Vec<(i64, NaiveDate, String, String, i64)> = sqlx::query_as(
            r#"
            SELECT o.id, o.order_date, p.name, p.brand, l.price_cents
            FROM orders o
            JOIN order_lines l ON o.id = l.order_id
            JOIN products p ON l.product_id = p.id
            WHERE o.customer_id = ?1
            ORDER BY o.order_date DESC, o.id ASC, p.name ASC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        // Rows arrive pre-sorted; consecutive rows with the same order id
        // belong to the same group.
        let mut orders: Vec<OrderGroup> = Vec::new();
        for (order_id, order_date, product, brand, price_cents) in rows {
            let line = HistoryLine {
                product,
                brand,
                price: Money::from_cents(price_cents),
            };

            match orders.last_mut() {
                Some(group) if group.order_id == order_id => group.lines.push(line),
                _ => orders.push(OrderGroup {
                    order_id,
                    order_date,
                    lines: vec![line],
                }),
            }
        }

        let message = if orders.is_empty() {
            "No orders found for this customer.".to_string()
        } else {
            format!(
                "Order history for customer {customer_id} ({customer_name}): {} order(s)",
                orders.len()
            )
        };

        Ok(OrderHistory {
            customer_id,
            customer_name,
            orders,
            message,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::testutil::{alice, seed_catalog, test_db};
    use chrono::Utc;
    use orderdesk_core::ValidationError;

    #[tokio::test]
    async fn daily_sales_with_no_orders_is_zero_not_an_error() {
        let db = test_db().await;

        let report = db.reports().daily_sales("2026-08-07").await.unwrap();
        assert!(report.total.is_zero());
        assert_eq!(report.message, "No sales recorded for 2026-08-07.");
    }

    #[tokio::test]
    async fn daily_sales_sums_line_snapshots_for_the_date() {
        let db = test_db().await;
        seed_catalog(&db).await;
        let customer_id = db.customers().register(&alice()).await.unwrap();

        // Two orders today: 18.99 + 34.50, then 18.99.
        db.orders().place_order(customer_id, &[3, 5]).await.unwrap();
        db.orders().place_order(customer_id, &[3]).await.unwrap();

        let today = Utc::now().date_naive();
        let report = db
            .reports()
            .daily_sales(&today.format("%Y-%m-%d").to_string())
            .await
            .unwrap();

        assert_eq!(report.total, Money::from_cents(1899 + 3450 + 1899));
        assert_eq!(
            report.message,
            format!("Total sales for {today}: $72.48")
        );
    }

    #[tokio::test]
    async fn daily_sales_rejects_malformed_dates() {
        let db = test_db().await;

        let err = db.reports().daily_sales("08/07/2026").await.unwrap_err();
        assert!(matches!(
            err,
            DbError::Validation(ValidationError::InvalidDate { .. })
        ));
    }

    #[tokio::test]
    async fn history_for_unknown_customer_is_not_found() {
        let db = test_db().await;

        let err = db.reports().customer_order_history(7).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { ref entity, .. } if entity == "Customer"));
    }

    #[tokio::test]
    async fn history_for_customer_without_orders_is_empty_not_an_error() {
        let db = test_db().await;
        let customer_id = db.customers().register(&alice()).await.unwrap();

        let history = db
            .reports()
            .customer_order_history(customer_id)
            .await
            .unwrap();

        assert_eq!(history.customer_name, "Alice Martin");
        assert!(history.orders.is_empty());
        assert_eq!(history.message, "No orders found for this customer.");
    }

    #[tokio::test]
    async fn history_groups_by_order_newest_date_first() {
        let db = test_db().await;
        seed_catalog(&db).await;
        let customer_id = db.customers().register(&alice()).await.unwrap();

        // Two orders placed "today"; backdate the first to exercise the
        // date-descending contract.
        let first = db.orders().place_order(customer_id, &[3, 5]).await.unwrap();
        let second = db.orders().place_order(customer_id, &[3]).await.unwrap();

        sqlx::query("UPDATE orders SET order_date = ?1 WHERE id = ?2")
            .bind(NaiveDate::from_ymd_opt(2000, 1, 2).unwrap())
            .bind(first.order_id)
            .execute(db.pool())
            .await
            .unwrap();

        let history = db
            .reports()
            .customer_order_history(customer_id)
            .await
            .unwrap();

        // Newest date first, even though the backdated order has the lower id.
        assert_eq!(history.orders.len(), 2);
        assert_eq!(history.orders[0].order_id, second.order_id);
        assert_eq!(history.orders[1].order_id, first.order_id);
        assert_eq!(
            history.orders[1].order_date,
            NaiveDate::from_ymd_opt(2000, 1, 2).unwrap()
        );

        // Lines inside a group come back sorted by product name.
        let names: Vec<&str> = history.orders[1]
            .lines
            .iter()
            .map(|l| l.product.as_str())
            .collect();
        assert_eq!(names, vec!["Espresso Beans 1kg", "Moka Pot"]);

        // Snapshot prices survive in the history view.
        assert_eq!(history.orders[0].lines[0].price, Money::from_cents(1899));
    }
}
