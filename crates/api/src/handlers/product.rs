//! Handlers for the `/products` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::validation::{
    trim_in_place, validate_category_ref, validate_code, validate_name, validate_price_cents,
};
use catalog_db::models::product::{CreateProduct, Product, ProductListParams, UpdateProduct};

use crate::error::AppResult;
use crate::extract::{JsonBody, QueryParams};
use crate::middleware::auth::AuthUser;
use crate::services::ProductService;
use crate::state::AppState;

/// Field checks shared by create and update payloads, run after trimming.
fn validate_fields(
    category_id: Option<&str>,
    code: &str,
    name: &str,
    price_cents: i32,
) -> Result<(), CoreError> {
    validate_category_ref(category_id)?;
    validate_code(code)?;
    validate_name("name", name)?;
    validate_price_cents(price_cents)
}

/// POST /products
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    JsonBody(mut input): JsonBody<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    trim_in_place(&mut input.code);
    trim_in_place(&mut input.name);
    validate_fields(
        input.category_id.as_deref(),
        &input.code,
        &input.name,
        input.price_cents,
    )?;
    let product = ProductService::create(&state.pool, &input).await?;
    tracing::info!(
        user_id = %user.user_id,
        product_id = %product.id,
        code = %product.code,
        "Product created"
    );
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products?category_id=
pub async fn list(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ProductListParams>,
) -> AppResult<Json<Vec<Product>>> {
    let products = ProductService::list(&state.pool, params.category_id.as_deref()).await?;
    Ok(Json(products))
}

/// GET /products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = ProductService::get(&state.pool, &id).await?;
    Ok(Json(product))
}

/// PUT /products/{id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(mut input): JsonBody<UpdateProduct>,
) -> AppResult<Json<Product>> {
    trim_in_place(&mut input.code);
    trim_in_place(&mut input.name);
    validate_fields(
        input.category_id.as_deref(),
        &input.code,
        &input.name,
        input.price_cents,
    )?;
    let product = ProductService::update(&state.pool, &id, &input).await?;
    tracing::info!(user_id = %user.user_id, product_id = %id, "Product updated");
    Ok(Json(product))
}

/// DELETE /products/{id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    ProductService::delete(&state.pool, &id).await?;
    tracing::info!(user_id = %user.user_id, product_id = %id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
