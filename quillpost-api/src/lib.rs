//! # Quillpost API Server Library
//!
//! This library provides the HTTP surface of the Quillpost blogging backend.
//!
//! ## Modules
//!
//! - `app`: Application state, router builder and the bearer-token layer
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `validation`: Request schemas and sanitize-then-validate helpers
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod validation;
