//! # Category Repository
//!
//! Database operations for categories.
//!
//! Categories are keyed by caller-visible string ids: the creator may supply
//! one, otherwise a UUID v4 is generated here. They are plain grouping
//! records with no link into the checkout path.

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use kasir_core::Category;

/// Repository for category database operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Lists all categories.
    pub async fn list(&self) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Gets a category by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Category))` - Category found
    /// * `Ok(None)` - Category not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description
            FROM categories
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    /// Inserts a new category.
    ///
    /// ## Arguments
    /// * `id` - Caller-supplied id; a UUID v4 is generated when absent
    /// * `name` - Validated category name
    /// * `description` - Optional free text
    pub async fn insert(
        &self,
        id: Option<String>,
        name: &str,
        description: Option<&str>,
    ) -> DbResult<Category> {
        let id = match id {
            Some(id) if !id.trim().is_empty() => id,
            _ => Uuid::new_v4().to_string(),
        };

        debug!(id = %id, name = %name, "Inserting category");

        sqlx::query(
            r#"
            INSERT INTO categories (id, name, description)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&id)
        .bind(name)
        .bind(description)
        .execute(&self.pool)
        .await?;

        Ok(Category {
            id,
            name: name.to_string(),
            description: description.map(String::from),
        })
    }

    /// Updates an existing category.
    ///
    /// ## Returns
    /// * `Ok(Category)` - Updated category
    /// * `Err(DbError::NotFound)` - Category doesn't exist
    pub async fn update(
        &self,
        id: &str,
        name: &str,
        description: Option<&str>,
    ) -> DbResult<Category> {
        debug!(id = %id, "Updating category");

        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = ?2, description = ?3
            WHERE id = ?1
            RETURNING id, name, description
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_optional(&self.pool)
        .await?;

        category.ok_or_else(|| DbError::not_found("Category", id))
    }

    /// Deletes a category.
    ///
    /// ## Returns
    /// * `Ok(())` - Delete successful
    /// * `Err(DbError::NotFound)` - Category doesn't exist
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting category");

        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }

        Ok(())
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
    async fn test_insert_generates_uuid_when_absent() {
        let db = test_db().await;
        let repo = db.categories();

        let category = repo.insert(None, "Minuman", None).await.unwrap();
        assert!(Uuid::parse_str(&category.id).is_ok());

        let fetched = repo.get_by_id(&category.id).await.unwrap().unwrap();
        assert_eq!(fetched, category);
    }

    #[tokio::test]
    async fn test_insert_keeps_supplied_id() {
        let db = test_db().await;
        let repo = db.categories();

        let category = repo
            .insert(Some("makanan-ringan".to_string()), "Makanan Ringan", Some("Snack"))
            .await
            .unwrap();
        assert_eq!(category.id, "makanan-ringan");
        assert_eq!(category.description.as_deref(), Some("Snack"));
    }

    #[tokio::test]
    async fn test_list_orders_by_name() {
        let db = test_db().await;
        let repo = db.categories();

        repo.insert(None, "Minuman", None).await.unwrap();
        repo.insert(None, "Makanan", None).await.unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Makanan", "Minuman"]);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let db = test_db().await;
        let repo = db.categories();

        let category = repo.insert(None, "Minuman", None).await.unwrap();

        let updated = repo
            .update(&category.id, "Minuman Dingin", Some("Es"))
            .await
            .unwrap();
        assert_eq!(updated.name, "Minuman Dingin");
        assert_eq!(updated.description.as_deref(), Some("Es"));

        repo.delete(&category.id).await.unwrap();
        assert!(repo.get_by_id(&category.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let db = test_db().await;

        let err = db
            .categories()
            .update("ghost", "Ghost", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
