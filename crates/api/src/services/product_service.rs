use catalog_core::error::CoreError;
use catalog_db::models::product::{CreateProduct, Product, UpdateProduct};
use catalog_db::repositories::ProductRepo;
use sqlx::PgPool;

use crate::error::{AppResult, StorageContext};

/// Product use cases.
pub struct ProductService;

impl ProductService {
    /// Create an active product under a freshly generated id.
    ///
    /// Fails with [`CoreError::Conflict`] if any product, including a
    /// soft-deleted one, already uses this code.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> AppResult<Product> {
        let id = super::new_id();
        ProductRepo::create(pool, &id, input)
            .await
            .context("failed to create product")?
            .ok_or_else(|| {
                CoreError::Conflict(format!("product code '{}' already exists", input.code)).into()
            })
    }

    /// List active products. An empty `category_id` means no filter.
    pub async fn list(pool: &PgPool, category_id: Option<&str>) -> AppResult<Vec<Product>> {
        let category_id = category_id.filter(|id| !id.is_empty());
        ProductRepo::list(pool, category_id)
            .await
            .context("failed to list products")
    }

    pub async fn get(pool: &PgPool, id: &str) -> AppResult<Product> {
        find_active(pool, id, "failed to get product").await
    }

    /// Overwrite a product's fields and return its persisted state.
    ///
    /// Submitting `is_active: false` deactivates the product, after which the
    /// follow-up read reports [`CoreError::NotFound`] like any other deleted row.
    pub async fn update(pool: &PgPool, id: &str, input: &UpdateProduct) -> AppResult<Product> {
        let updated = ProductRepo::update(pool, id, input)
            .await
            .context("failed to update product")?;
        if !updated {
            tracing::debug!(product_id = %id, "Product update matched no active row");
        }
        find_active(pool, id, "failed to get updated product").await
    }

    /// Soft-delete a product. Succeeds whether or not it was active.
    pub async fn delete(pool: &PgPool, id: &str) -> AppResult<()> {
        ProductRepo::soft_delete(pool, id)
            .await
            .context("failed to delete product")
    }
}

async fn find_active(pool: &PgPool, id: &str, context: &'static str) -> AppResult<Product> {
    ProductRepo::find_by_id(pool, id)
        .await
        .context(context)?
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: "Product",
                id: id.to_string(),
            }
            .into()
        })
}
