//!
//! Catalog Core - Domain model for the Catalog service
//!
//! This crate defines the product domain types, validation rules, and the
//! repository interface implemented by the state-store crates.

#![forbid(unsafe_code)]

/// Domain layer - entities, validation, and repository interfaces
pub mod domain;

/// Error types
pub mod error;

// Re-export key types
pub use domain::product::{Product, ProductFields, ProductId, ProductInput};
pub use domain::repository::ProductRepository;
pub use error::CoreError;
