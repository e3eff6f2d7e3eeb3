pub mod category;
pub mod health;
pub mod product;

use axum::middleware::from_fn_with_state;
use axum::Router;

use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// Build the protected catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                 list, create
/// /categories/{id}            get, update, delete
///
/// /products                   list (?category_id=), create
/// /products/{id}              get, update, delete
/// ```
///
/// Every route requires a valid bearer token; [`require_auth`] is applied as
/// a route layer so unmatched paths still fall through to 404.
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/products", product::router())
        .route_layer(from_fn_with_state(state, require_auth))
}
