//! Error types for the Catalog Server
//!
//! This module contains the error types used throughout the server.

use catalog_core::CoreError;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// Resource not found
    #[error("{0} not found")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Product store error; the detail stays server-side
    #[error("Store error: {0}")]
    StoreError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

impl From<CoreError> for ServerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => ServerError::ValidationError(msg),
            CoreError::ProductNotFound(id) => ServerError::NotFound(format!("Product {}", id)),
            CoreError::StateStoreError(msg) => ServerError::StoreError(msg),
            CoreError::SerializationError(msg) => ServerError::InternalError(msg),
            CoreError::Other(msg) => ServerError::InternalError(msg),
        }
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::InternalError(format!("IO error: {}", err))
    }
}
