//! Service layer between handlers and repositories.
//!
//! Services assign identifiers, turn skipped inserts into conflicts, attach
//! operation context to storage failures, and re-read rows after updates so
//! callers always see persisted state.

pub mod category_service;
pub mod product_service;

pub use category_service::CategoryService;
pub use product_service::ProductService;

/// Generate a new catalog identifier (UUID v4, hyphenated text).
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
