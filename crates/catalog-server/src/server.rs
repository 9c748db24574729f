//! Main Catalog Server implementation
//!
//! This module contains the CatalogServer implementation.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info};

use catalog_core::{Product, ProductFields, ProductId, ProductRepository};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};

/// Main server implementation
///
/// Owns the configuration and the product store; the API handlers delegate
/// to the methods here. Validation always runs before the store is touched,
/// so a validation failure can never be masked by a not-found or store
/// outcome.
#[derive(Clone)]
pub struct CatalogServer {
    /// Configuration
    pub config: ServerConfig,

    /// Product store
    store: Arc<dyn ProductRepository>,

    /// Server address (might be different from configured if port is 0)
    address: Option<SocketAddr>,
}

impl std::fmt::Debug for CatalogServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogServer")
            .field("config", &self.config)
            .field("address", &self.address)
            .finish()
    }
}

impl CatalogServer {
    /// Create a new CatalogServer
    pub fn new(config: ServerConfig, store: Arc<dyn ProductRepository>) -> Self {
        Self {
            config,
            store,
            address: None,
        }
    }

    /// Run the server
    pub async fn run(mut self) -> ServerResult<()> {
        info!("Starting Catalog Server");

        // Build the API router
        let app = crate::api::build_router(Arc::new(self.clone()));

        // Create and bind the TCP listener
        let addr = SocketAddr::new(
            self.config
                .bind_address
                .parse()
                .map_err(|e| ServerError::ConfigurationError(format!("Invalid bind address: {}", e)))?,
            self.config.port,
        );
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;

        // Store the actual bound address
        self.address = Some(addr);
        info!("Listening on {}", addr);

        // Run the server
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::InternalError(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Get the server's bound address
    pub fn address(&self) -> SocketAddr {
        self.address
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], self.config.port)))
    }

    /// List all products
    pub async fn list_products(&self) -> ServerResult<Vec<Product>> {
        let products = self.store.find_all().await?;
        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Validate and create a product; the store assigns the id
    pub async fn create_product(&self, fields: &ProductFields) -> ServerResult<Product> {
        let input = fields.validate()?;
        let product = self.store.insert(&input).await?;
        info!(id = %product.id, "Created product");
        Ok(product)
    }

    /// Validate and replace all fields of an existing product
    pub async fn update_product(
        &self,
        id: ProductId,
        fields: &ProductFields,
    ) -> ServerResult<Product> {
        let input = fields.validate()?;
        match self.store.update(&id, &input).await? {
            Some(product) => {
                info!(%id, "Updated product");
                Ok(product)
            }
            None => Err(ServerError::NotFound(format!("Product {}", id))),
        }
    }

    /// Delete a product
    pub async fn delete_product(&self, id: ProductId) -> ServerResult<()> {
        if self.store.delete(&id).await? {
            info!(%id, "Deleted product");
            Ok(())
        } else {
            Err(ServerError::NotFound(format!("Product {}", id)))
        }
    }

    /// Check that the product store answers queries
    pub async fn check_store_health(&self) -> ServerResult<bool> {
        match self.store.find_all().await {
            Ok(_) => Ok(true),
            Err(err) => Err(ServerError::from(err)),
        }
    }
}
