//! # Quillpost Shared Library
//!
//! This crate contains the types, persistence and security primitives used by
//! the Quillpost API server.
//!
//! ## Module Organization
//!
//! - `auth`: Password hashing, JWT tokens and the request auth context
//! - `db`: Connection pool and migrations
//! - `models`: Database models (users, blogs)
//! - `sanitize`: HTML sanitization for user-supplied text

pub mod auth;
pub mod db;
pub mod models;
pub mod sanitize;

/// Current version of the Quillpost shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
