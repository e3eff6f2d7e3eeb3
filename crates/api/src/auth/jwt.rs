//! JWT access-token verification and claim extraction.
//!
//! Tokens are issued by the upstream auth service and signed with a shared
//! HMAC secret. Only the HMAC family is accepted; any other `alg` header,
//! including `none`, fails validation.

use catalog_core::roles::RoleSet;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::{Map, Value};

/// Minimum accepted length of the shared signing secret, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Signing algorithms accepted for incoming tokens.
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Configuration for JWT validation.
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC secret shared with the token issuer.
    pub secret: String,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Claims the catalog cares about, extracted from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub user_id: String,
    pub email: Option<String>,
    pub roles: RoleSet,
}

/// Why a bearer token was refused.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Malformed token, bad signature, disallowed algorithm, or expired.
    #[error("invalid token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    /// The payload verified but `user_id` is absent, empty, or not a string.
    #[error("token has no usable user_id claim")]
    MissingUserId,
}

/// Verify a token's signature and expiry, then extract its claims.
///
/// `exp` is required and checked with the library's default 60 second leeway.
/// `email` is kept only when it is a string; `roles` keeps its string entries
/// and silently drops anything else.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<TokenClaims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();

    let token_data = decode::<Map<String, Value>>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    extract_claims(&token_data.claims)
}

fn extract_claims(claims: &Map<String, Value>) -> Result<TokenClaims, TokenError> {
    let user_id = match claims.get("user_id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        _ => return Err(TokenError::MissingUserId),
    };

    let email = match claims.get("email") {
        Some(Value::String(email)) => Some(email.clone()),
        _ => None,
    };

    let roles = match claims.get("roles") {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => RoleSet::new(),
    };

    Ok(TokenClaims {
        user_id,
        email,
        roles,
    })
}
