//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::validation::{trim_in_place, validate_name};
use catalog_db::models::category::{Category, CreateCategory, UpdateCategory};

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::services::CategoryService;
use crate::state::AppState;

/// POST /categories
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    JsonBody(mut input): JsonBody<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    trim_in_place(&mut input.name);
    validate_name("name", &input.name)?;
    let category = CategoryService::create(&state.pool, &input).await?;
    tracing::info!(user_id = %user.user_id, category_id = %category.id, "Category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryService::list(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Category>> {
    let category = CategoryService::get(&state.pool, &id).await?;
    Ok(Json(category))
}

/// PUT /categories/{id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(mut input): JsonBody<UpdateCategory>,
) -> AppResult<Json<Category>> {
    trim_in_place(&mut input.name);
    validate_name("name", &input.name)?;
    let category = CategoryService::update(&state.pool, &id, &input).await?;
    tracing::info!(user_id = %user.user_id, category_id = %id, "Category updated");
    Ok(Json(category))
}

/// DELETE /categories/{id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    CategoryService::delete(&state.pool, &id).await?;
    tracing::info!(user_id = %user.user_id, category_id = %id, "Category deleted");
    Ok(StatusCode::NO_CONTENT)
}
