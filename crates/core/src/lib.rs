//! Domain vocabulary shared by the catalog crates.
//!
//! Nothing here touches the database or HTTP; the `db` and `api` crates
//! build on these types.

pub mod error;
pub mod roles;
pub mod types;
pub mod validation;
