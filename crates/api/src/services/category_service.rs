use catalog_core::error::CoreError;
use catalog_db::models::category::{Category, CreateCategory, UpdateCategory};
use catalog_db::repositories::CategoryRepo;
use sqlx::PgPool;

use crate::error::{AppResult, StorageContext};

/// Category use cases.
pub struct CategoryService;

impl CategoryService {
    /// Create a category under a freshly generated id.
    ///
    /// Fails with [`CoreError::Conflict`] if any category, including a
    /// soft-deleted one, already has this name.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> AppResult<Category> {
        let id = super::new_id();
        CategoryRepo::create(pool, &id, input)
            .await
            .context("failed to create category")?
            .ok_or_else(|| {
                CoreError::Conflict(format!("category '{}' already exists", input.name)).into()
            })
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<Category>> {
        CategoryRepo::list(pool)
            .await
            .context("failed to list categories")
    }

    pub async fn get(pool: &PgPool, id: &str) -> AppResult<Category> {
        find_active(pool, id, "failed to get category").await
    }

    /// Rename a category and return its persisted state.
    ///
    /// The write is a no-op for unknown or deleted ids; the follow-up read
    /// then reports [`CoreError::NotFound`].
    pub async fn update(pool: &PgPool, id: &str, input: &UpdateCategory) -> AppResult<Category> {
        let updated = CategoryRepo::update(pool, id, input)
            .await
            .context("failed to update category")?;
        if !updated {
            tracing::debug!(category_id = %id, "Category update matched no active row");
        }
        find_active(pool, id, "failed to get updated category").await
    }

    /// Soft-delete a category. Succeeds whether or not it was active.
    pub async fn delete(pool: &PgPool, id: &str) -> AppResult<()> {
        CategoryRepo::soft_delete(pool, id)
            .await
            .context("failed to delete category")
    }
}

async fn find_active(pool: &PgPool, id: &str, context: &'static str) -> AppResult<Category> {
    CategoryRepo::find_by_id(pool, id)
        .await
        .context(context)?
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: "Category",
                id: id.to_string(),
            }
            .into()
        })
}
