//! Application router assembly.
//!
//! [`build_app_router`] is the single place where routes and middleware are
//! put together; `main.rs` and the integration tests both call it.

use std::any::Any as PanicPayload;
use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::middleware::map_response;
use axum::response::Response;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::{CorsOrigins, ServerConfig};
use crate::error::error_response;
use crate::routes;
use crate::state::AppState;

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// CORS preflight cache lifetime.
const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

/// Build the catalog [`Router`]: public health routes, the authenticated
/// catalog routes and the shared middleware stack.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let routes = Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes(state.clone()));

    with_middleware(
        routes,
        build_cors_layer(config),
        Duration::from_secs(config.request_timeout_secs),
    )
    .with_state(state)
}

/// Wrap `router` in the shared middleware stack.
///
/// Layers run outermost first, in this order:
///
/// ```text
/// CORS -> set x-request-id -> trace -> propagate x-request-id
///      -> timeout (JSON 408) -> catch panic (JSON 500) -> routes
/// ```
fn with_middleware<S>(router: Router<S>, cors: CorsLayer, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    // `Router::layer` wraps outward, so the last layer added runs first.
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(map_response(timeout_as_json))
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
        .layer(cors)
}

/// CORS policy for the configured origins.
///
/// Credentials are allowed only with an explicit origin list; browsers reject
/// them alongside a wildcard.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(CORS_MAX_AGE);

    match &config.cors_origins {
        CorsOrigins::Any => cors.allow_origin(Any),
        CorsOrigins::List(origins) => cors
            .allow_origin(origins.clone())
            .allow_credentials(true),
    }
}

/// Replace the timeout layer's empty 408 with the standard error body.
///
/// Handlers never answer 408 themselves, so an untyped 408 is always the
/// timeout firing.
async fn timeout_as_json(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT
        && !response.headers().contains_key(CONTENT_TYPE)
    {
        tracing::warn!("Request timed out");
        return error_response(StatusCode::REQUEST_TIMEOUT, "TIMEOUT", "Request timed out");
    }
    response
}

fn panic_response(payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload");
    tracing::error!(panic = detail, "Handler panicked");
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred",
    )
}
