//! Repository traits for the Catalog Core
//!
//! This module defines the store interface used by the server. External
//! crates implement it to provide different persistence mechanisms.

use async_trait::async_trait;

use super::product::{Product, ProductId, ProductInput};
use crate::CoreError;

/// Repository for products
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products, ordered by id
    async fn find_all(&self) -> Result<Vec<Product>, CoreError>;

    /// Find a product by id
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, CoreError>;

    /// Insert a new product; the store assigns the id
    async fn insert(&self, input: &ProductInput) -> Result<Product, CoreError>;

    /// Replace all four fields of an existing product
    ///
    /// Returns `None` when no row matches the id.
    async fn update(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<Option<Product>, CoreError>;

    /// Delete a product
    ///
    /// Returns `false` when no row matches the id.
    async fn delete(&self, id: &ProductId) -> Result<bool, CoreError>;
}
