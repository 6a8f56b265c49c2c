//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD with store-assigned integer ids
//! - Name search for the list endpoint
//! - Snapshot reads feeding checkout validation
//!
//! ## Snapshot Reads
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Checkout Snapshot Read                                  │
//! │                                                                         │
//! │  Cart: [{product_id: 1, qty: 3}, {product_id: 2, qty: 2}]               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  snapshot([1, 2]) ← THIS MODULE                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  {1: Product{stock: 10, ...}, 2: Product{stock: 5, ...}}                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  kasir_core::checkout::validate(cart, snapshot)                         │
//! │                                                                         │
//! │  The snapshot is advisory only. Stock is enforced again by the          │
//! │  transaction writer's conditional decrement.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use kasir_core::Product;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// // List products, optionally filtered by name
/// let results = repo.list(Some("indomie")).await?;
///
/// // Get by ID
/// let product = repo.get_by_id(1).await?;
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

    /// Lists products, optionally filtered by a name substring.
    ///
    /// ## Arguments
    /// * `name_filter` - Substring to match against product names.
    ///   Empty or absent returns every product.
    ///
    /// SQLite LIKE is case-insensitive for ASCII, so "indomie" matches
    /// "Indomie Goreng".
    pub async fn list(&self, name_filter: Option<&str>) -> DbResult<Vec<Product>> {
        let filter = name_filter.map(str::trim).unwrap_or("");

        debug!(filter = %filter, "Listing products");

        let products = if filter.is_empty() {
            sqlx::query_as::<_, Product>(
                r#"
                SELECT id, name, price, stock
                FROM products
                ORDER BY id
                "#,
            )
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, Product>(
                r#"
                SELECT id, name, price, stock
                FROM products
                WHERE name LIKE '%' || ?1 || '%'
                ORDER BY id
                "#,
            )
            .bind(filter)
            .fetch_all(&self.pool)
            .await?
        };

        debug!(count = products.len(), "List returned products");
        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, stock
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Reads the referenced products into an id-keyed map.
    ///
    /// Feeds checkout validation: missing ids are simply absent from the
    /// map (the validator reports them in item order), and duplicate ids
    /// are read once.
    pub async fn snapshot(&self, ids: &[i64]) -> DbResult<HashMap<i64, Product>> {
        let mut products = HashMap::with_capacity(ids.len());

        for &id in ids {
            if products.contains_key(&id) {
                continue;
            }
            if let Some(product) = self.get_by_id(id).await? {
                products.insert(id, product);
            }
        }

        Ok(products)
    }

    /// Inserts a new product.
    ///
    /// ## Arguments
    /// * `name`, `price`, `stock` - Validated field values
    ///
    /// ## Returns
    /// The inserted product with its store-assigned id.
    pub async fn insert(&self, name: &str, price: i64, stock: i64) -> DbResult<Product> {
        debug!(name = %name, "Inserting product");

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, stock)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, price, stock
            "#,
        )
        .bind(name)
        .bind(price)
        .bind(stock)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    /// Updates an existing product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Updated product
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn update(&self, id: i64, name: &str, price: i64, stock: i64) -> DbResult<Product> {
        debug!(id = %id, "Updating product");

        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = ?2, price = ?3, stock = ?4
            WHERE id = ?1
            RETURNING id, name, price, stock
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(price)
        .bind(stock)
        .fetch_optional(&self.pool)
        .await?;

        product.ok_or_else(|| DbError::not_found("Product", id))
    }

    /// Deletes a product.
    ///
    /// ## Returns
    /// * `Ok(())` - Delete successful
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts total products (for diagnostics and the seed tool).
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
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = test_db().await;
        let repo = db.products();

        let product = repo.insert("Indomie Goreng", 3500, 10).await.unwrap();
        assert!(product.id > 0);
        assert_eq!(product.name, "Indomie Goreng");
        assert_eq!(product.price, 3500);
        assert_eq!(product.stock, 10);

        let fetched = repo.get_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(fetched, product);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let db = test_db().await;

        assert!(db.products().get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_with_filter() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert("Indomie Goreng", 3500, 10).await.unwrap();
        repo.insert("Indomie Soto", 3200, 8).await.unwrap();
        repo.insert("Kopi Susu", 5000, 5).await.unwrap();

        let all = repo.list(None).await.unwrap();
        assert_eq!(all.len(), 3);

        // Case-insensitive substring match
        let filtered = repo.list(Some("indomie")).await.unwrap();
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| p.name.starts_with("Indomie")));

        let none = repo.list(Some("bakso")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_skips_missing_and_duplicates() {
        let db = test_db().await;
        let repo = db.products();

        let p = repo.insert("Teh Botol", 4000, 12).await.unwrap();

        let snapshot = repo.snapshot(&[p.id, p.id, 999]).await.unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[&p.id].name, "Teh Botol");
    }

    #[tokio::test]
    async fn test_update() {
        let db = test_db().await;
        let repo = db.products();

        let product = repo.insert("Kopi Susu", 5000, 5).await.unwrap();
        let updated = repo.update(product.id, "Kopi Susu Gula Aren", 6000, 7).await.unwrap();

        assert_eq!(updated.id, product.id);
        assert_eq!(updated.name, "Kopi Susu Gula Aren");
        assert_eq!(updated.price, 6000);
        assert_eq!(updated.stock, 7);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let db = test_db().await;

        let err = db.products().update(999, "Ghost", 1, 1).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_db().await;
        let repo = db.products();

        let product = repo.insert("Teh Botol", 4000, 12).await.unwrap();
        repo.delete(product.id).await.unwrap();

        assert!(repo.get_by_id(product.id).await.unwrap().is_none());

        let err = repo.delete(product.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
