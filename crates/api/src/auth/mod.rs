//! Authentication primitives.
//!
//! - [`jwt`] -- Bearer token verification and claim extraction.

pub mod jwt;
