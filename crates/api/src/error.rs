use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers and services.
///
/// Wraps [`CoreError`] for domain errors and carries storage failures together
/// with the operation that produced them. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `catalog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database failure, annotated with the operation that was running.
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// The request body could not be decoded into the expected shape.
    #[error(transparent)]
    Body(#[from] JsonRejection),

    /// The query string could not be decoded into the expected parameters.
    #[error(transparent)]
    Query(#[from] QueryRejection),
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

/// Attach an operation description to a raw sqlx result.
///
/// ```ignore
/// CategoryRepo::list(pool).await.context("failed to list categories")?;
/// ```
pub trait StorageContext<T> {
    fn context(self, context: &'static str) -> AppResult<T>;
}

impl<T> StorageContext<T> for Result<T, sqlx::Error> {
    fn context(self, context: &'static str) -> AppResult<T> {
        self.map_err(|source| AppError::Storage { context, source })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Storage { context, source } => classify_sqlx_error(*context, source),

            // --- Undecodable request bodies and query strings ---
            AppError::Body(rejection) => {
                (rejection.status(), "VALIDATION_ERROR", rejection.body_text())
            }
            AppError::Query(rejection) => {
                (rejection.status(), "VALIDATION_ERROR", rejection.body_text())
            }
        };

        error_response(status, code, message)
    }
}

/// The `{error, code}` JSON body shared by every error response.
pub fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    let body = json!({
        "error": message.into(),
        "code": code,
    });
    (status, axum::Json(body)).into_response()
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Check constraint violations (constraint name starting with `ck_`) map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(
    context: &'static str,
    err: &sqlx::Error,
) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                // PostgreSQL unique_violation
                Some("23505") if constraint.starts_with("uq_") => {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
                // PostgreSQL check_violation
                Some("23514") if constraint.starts_with("ck_") => {
                    return (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        format!("Value violates check constraint: {constraint}"),
                    );
                }
                _ => {}
            }
            tracing::error!(error = %db_err, context, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, context, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
