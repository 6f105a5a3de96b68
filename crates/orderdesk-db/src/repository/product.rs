//! # Product Repository
//!
//! Database operations for the product catalog.
//!
//! ## Key Operations
//! - Inventory lookup by id, by SKU, or the whole catalog
//! - Insert (seeding and imports)
//!
//! Stock mutation lives in [`crate::repository::order`]: the order workflow
//! is the only code path that decrements stock, and it does so inside its
//! own transaction.

use serde::Serialize;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use orderdesk_core::Product;

/// Filter for an inventory lookup.
///
/// The form layer enforces that at most one of id/SKU is supplied; this
/// enum makes "both at once" unrepresentable here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProductFilter {
    /// Full catalog listing.
    #[default]
    All,
    /// Single product by identifier.
    ById(i64),
    /// Single product by stock-keeping code.
    BySku(String),
}

/// Payload of an inventory check: the matching rows plus the status line
/// the form layer displays.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryReport {
    /// Matching products, ascending by id.
    pub products: Vec<Product>,
    pub message: String,
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// // Whole catalog, ascending by id
/// let all = repo.lookup(&ProductFilter::All).await?;
///
/// // Single SKU
/// let hits = repo.lookup(&ProductFilter::BySku("BEAN-1KG".into())).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Looks up products matching the filter.
    ///
    /// ## Contract
    /// - Always ordered ascending by product id
    /// - One query, one finite result set (a snapshot, not a live view)
    /// - An empty result is `Ok(vec![])`, never an error; the caller words
    ///   it as "no products found"
    pub async fn lookup(&self, filter: &ProductFilter) -> DbResult<Vec<Product>> {
        debug!(?filter, "Inventory lookup");

        const BASE: &str = "SELECT id, name, brand, sku, stock, price_cents FROM products";

        let products = match filter {
            ProductFilter::All => {
                sqlx::query_as::<_, Product>(&format!("{BASE} ORDER BY id"))
                    .fetch_all(&self.pool)
                    .await?
            }
            ProductFilter::ById(id) => {
                sqlx::query_as::<_, Product>(&format!("{BASE} WHERE id = ?1 ORDER BY id"))
                    .bind(id)
                    .fetch_all(&self.pool)
                    .await?
            }
            ProductFilter::BySku(sku) => {
                sqlx::query_as::<_, Product>(&format!("{BASE} WHERE sku = ?1 ORDER BY id"))
                    .bind(sku)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        debug!(count = products.len(), "Lookup returned products");
        Ok(products)
    }

    /// Runs an inventory check and words the outcome for display.
    ///
    /// Same snapshot as [`lookup`](Self::lookup); an empty match is a
    /// normal result with a "no products found" message.
    pub async fn check_inventory(&self, filter: &ProductFilter) -> DbResult<InventoryReport> {
        let products = self.lookup(filter).await?;

        let message = if products.is_empty() {
            "No products found matching the criteria.".to_string()
        } else {
            format!("{} product(s) in inventory view", products.len())
        };

        Ok(InventoryReport { products, message })
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, brand, sku, stock, price_cents
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a product row.
    ///
    /// Catalog rows pre-exist as far as the desk operations are concerned;
    /// this is the provisioning path used by the seed binary and tests.
    ///
    /// ## Returns
    /// * `Ok(())` - Row inserted
    /// * `Err(DbError::UniqueViolation)` - SKU already exists
    pub async fn insert(&self, product: &Product) -> DbResult<()> {
        debug!(sku = %product.sku, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (id, name, brand, sku, stock, price_cents)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.brand)
        .bind(&product.sku)
        .bind(product.stock)
        .bind(product.price_cents)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Counts catalog products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
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
    use crate::repository::testutil::{seed_catalog, test_db};

    #[tokio::test]
    async fn unfiltered_lookup_returns_every_row_ascending_by_id() {
        let db = test_db().await;
        seed_catalog(&db).await;

        let products = db.products().lookup(&ProductFilter::All).await.unwrap();

        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 5, 9]);
        assert_eq!(products.len() as i64, db.products().count().await.unwrap());
    }

    #[tokio::test]
    async fn lookup_by_id_and_by_sku() {
        let db = test_db().await;
        seed_catalog(&db).await;

        let by_id = db.products().lookup(&ProductFilter::ById(5)).await.unwrap();
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].sku, "MOKA-6");

        let by_sku = db
            .products()
            .lookup(&ProductFilter::BySku("BEAN-1KG".to_string()))
            .await
            .unwrap();
        assert_eq!(by_sku.len(), 1);
        assert_eq!(by_sku[0].id, 3);
    }

    #[tokio::test]
    async fn lookup_miss_is_empty_not_an_error() {
        let db = test_db().await;
        seed_catalog(&db).await;

        let none = db
            .products()
            .lookup(&ProductFilter::ById(404))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn check_inventory_words_the_outcome() {
        let db = test_db().await;
        seed_catalog(&db).await;

        let hit = db
            .products()
            .check_inventory(&ProductFilter::All)
            .await
            .unwrap();
        assert_eq!(hit.products.len(), 3);
        assert_eq!(hit.message, "3 product(s) in inventory view");

        let miss = db
            .products()
            .check_inventory(&ProductFilter::BySku("NOPE".to_string()))
            .await
            .unwrap();
        assert!(miss.products.is_empty());
        assert_eq!(miss.message, "No products found matching the criteria.");
    }

    #[tokio::test]
    async fn duplicate_sku_is_rejected() {
        let db = test_db().await;
        seed_catalog(&db).await;

        let dup = orderdesk_core::Product {
            id: 77,
            name: "Other Beans".to_string(),
            brand: "Roastery".to_string(),
            sku: "BEAN-1KG".to_string(),
            stock: 1,
            price_cents: 999,
        };

        let err = db.products().insert(&dup).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }
}
