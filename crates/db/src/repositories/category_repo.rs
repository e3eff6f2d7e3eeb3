//! Repository for the `categories` table.

use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new active category with a caller-assigned id.
    ///
    /// Returns `None` when the insert was skipped because another row, active
    /// or soft-deleted, already holds the same name.
    pub async fn create(
        pool: &PgPool,
        id: &str,
        input: &CreateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (id, name, is_active)
             VALUES ($1, $2, true)
             ON CONFLICT (name) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// List all active categories ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories WHERE is_active = true ORDER BY name ASC, id ASC"
        );
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find an active category by id. Soft-deleted rows are not returned.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1 AND is_active = true");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Rename an active category. Returns `true` if a row was updated.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateCategory,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE categories SET name = $2, updated_at = NOW()
             WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .bind(&input.name)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete a category by id.
    ///
    /// Applies whether or not the row is currently active, so repeated calls
    /// are harmless. Products referencing the category are left untouched.
    pub async fn soft_delete(pool: &PgPool, id: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE categories SET is_active = false, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
