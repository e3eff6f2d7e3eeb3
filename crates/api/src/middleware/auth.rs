//! JWT authentication gate and caller extractor for Axum.
//!
//! [`require_auth`] runs before any protected handler. It either attaches an
//! [`AuthUser`] to the request extensions or answers 401 itself, so the
//! service layer only ever sees authenticated requests.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use catalog_core::error::CoreError;
use catalog_core::roles::{Role, RoleSet};

use crate::auth::jwt::{validate_token, JwtConfig, TokenError};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller, attached to the request by [`require_auth`].
///
/// Use this as an extractor parameter in any protected handler:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The caller's id from the `user_id` claim.
    pub user_id: String,
    /// The `email` claim, when present and a string.
    pub email: Option<String>,
    /// String entries of the `roles` claim.
    pub roles: RoleSet,
}

/// Middleware that validates the `Authorization: Bearer <token>` header.
///
/// Mount with `axum::middleware::from_fn_with_state` on every protected
/// router.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate(request.headers(), &state.config.jwt)?;
    {
        let roles: Vec<&str> = user.roles.iter().map(Role::as_str).collect();
        tracing::debug!(user_id = %user.user_id, ?roles, "Request authenticated");
    }
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Resolve the caller from request headers, or explain why not.
fn authenticate(headers: &HeaderMap, config: &JwtConfig) -> Result<AuthUser, AppError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized("Authorization header required"))?
        .to_str()
        .map_err(|_| unauthorized("Authorization header is not valid text"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .filter(|t| !t.is_empty())
        .ok_or_else(|| unauthorized("Bearer token required"))?;

    let claims = validate_token(token, config).map_err(|err| {
        tracing::debug!(error = %err, "Rejected bearer token");
        match err {
            TokenError::Invalid(_) => unauthorized("Invalid or expired token"),
            TokenError::MissingUserId => unauthorized("Invalid user ID in token"),
        }
    })?;

    Ok(AuthUser {
        user_id: claims.user_id,
        email: claims.email,
        roles: claims.roles,
    })
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| unauthorized("Authentication required"))
    }
}
