//! Repository for the `products` table.
//!
//! Every read left-joins `categories` so a product carries a snapshot of its
//! category when `category_id` points at an active row.

use catalog_core::types::{DbId, Timestamp};
use sqlx::{FromRow, PgPool};

use crate::models::category::CategorySummary;
use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Select list for a product aliased `p` joined to a category aliased `c`.
const JOINED_COLUMNS: &str = "p.id, p.category_id, p.code, p.name, p.price_cents, p.is_active, \
     p.created_at, p.updated_at, c.id AS cat_id, c.name AS cat_name";

/// Join clause attaching only active categories.
const CATEGORY_JOIN: &str = "LEFT JOIN categories c ON c.id = p.category_id AND c.is_active = true";

/// Flat row shape produced by the joined queries.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: DbId,
    category_id: Option<DbId>,
    code: String,
    name: String,
    price_cents: i32,
    is_active: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
    cat_id: Option<DbId>,
    cat_name: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        let category = match (row.cat_id, row.cat_name) {
            (Some(id), Some(name)) => Some(CategorySummary { id, name }),
            _ => None,
        };
        Product {
            id: row.id,
            category_id: row.category_id,
            code: row.code,
            name: row.name,
            price_cents: row.price_cents,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
            category,
        }
    }
}

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new active product with a caller-assigned id, returning it
    /// with its category attached.
    ///
    /// Returns `None` when the insert was skipped because another row, active
    /// or soft-deleted, already holds the same code.
    pub async fn create(
        pool: &PgPool,
        id: &str,
        input: &CreateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "WITH p AS (
                INSERT INTO products (id, category_id, code, name, price_cents, is_active)
                VALUES ($1, $2, $3, $4, $5, true)
                ON CONFLICT (code) DO NOTHING
                RETURNING *
             )
             SELECT {JOINED_COLUMNS} FROM p {CATEGORY_JOIN}"
        );
        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .bind(&input.category_id)
            .bind(&input.code)
            .bind(&input.name)
            .bind(input.price_cents)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Product::from))
    }

    /// List active products ordered by name, optionally restricted to one
    /// category.
    pub async fn list(
        pool: &PgPool,
        category_id: Option<&str>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let rows = match category_id {
            Some(category_id) => {
                let query = format!(
                    "SELECT {JOINED_COLUMNS} FROM products p {CATEGORY_JOIN}
                     WHERE p.category_id = $1 AND p.is_active = true
                     ORDER BY p.name ASC, p.id ASC"
                );
                sqlx::query_as::<_, ProductRow>(&query)
                    .bind(category_id)
                    .fetch_all(pool)
                    .await?
            }
            None => {
                let query = format!(
                    "SELECT {JOINED_COLUMNS} FROM products p {CATEGORY_JOIN}
                     WHERE p.is_active = true
                     ORDER BY p.name ASC, p.id ASC"
                );
                sqlx::query_as::<_, ProductRow>(&query)
                    .fetch_all(pool)
                    .await?
            }
        };
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Find an active product by id. Soft-deleted rows are not returned.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM products p {CATEGORY_JOIN}
             WHERE p.id = $1 AND p.is_active = true"
        );
        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Product::from))
    }

    /// Overwrite the mutable fields of an active product. Returns `true` if a
    /// row was updated.
    ///
    /// `is_active` is written as given, so this can deactivate a product but
    /// never reactivate one: inactive rows do not match the `WHERE` clause.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateProduct,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE products SET
                category_id = $2,
                code = $3,
                name = $4,
                price_cents = $5,
                is_active = $6,
                updated_at = NOW()
             WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .bind(&input.category_id)
        .bind(&input.code)
        .bind(&input.name)
        .bind(input.price_cents)
        .bind(input.is_active)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete a product by id. Idempotent.
    pub async fn soft_delete(pool: &PgPool, id: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE products SET is_active = false, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
