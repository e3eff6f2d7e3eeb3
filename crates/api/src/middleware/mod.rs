//! Request middleware.
//!
//! - [`auth::require_auth`] -- Rejects requests without a valid bearer token.
//! - [`auth::AuthUser`] -- Extracts the caller identity it attached.

pub mod auth;
