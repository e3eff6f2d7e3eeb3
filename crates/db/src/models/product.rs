//! Product entity model and DTOs.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::models::category::CategorySummary;

/// An active row from the `products` table, optionally enriched with its
/// category.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: DbId,
    pub category_id: Option<DbId>,
    pub code: String,
    pub name: String,
    pub price_cents: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Present only when `category_id` points at an active category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategorySummary>,
}

/// DTO for creating a new product. New products are always active.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub category_id: Option<DbId>,
    pub code: String,
    pub name: String,
    pub price_cents: i32,
}

/// DTO for replacing a product's mutable fields.
///
/// Every field is written; an absent `category_id` clears the reference.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub category_id: Option<DbId>,
    pub code: String,
    pub name: String,
    pub price_cents: i32,
    pub is_active: bool,
}

/// Query parameters for `GET /products`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListParams {
    pub category_id: Option<DbId>,
}
