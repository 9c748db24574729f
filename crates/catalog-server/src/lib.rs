//!
//! Catalog Server - REST API server for the Catalog service
//!
//! This module exports all the components of the Catalog Server.

use std::sync::Arc;

/// API module
pub mod api;

/// Server module
pub mod server;

/// Configuration module
pub mod config;

/// Error module
pub mod error;

// Re-export key types
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::CatalogServer;

use catalog_core::ProductRepository;
use catalog_state_postgres::{PostgresConfig, PostgresProductStoreProvider};

/// Run function
pub async fn run(config: ServerConfig) -> ServerResult<()> {
    // Initialize logging
    init_logging(&config);

    // Create dependencies
    let store = create_product_store(&config).await?;

    // Create and run the server
    let server = CatalogServer::new(config, store);
    server.run().await
}

/// Initialize logging
fn init_logging(config: &ServerConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    // Create filter based on config
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    // Initialize subscriber
    fmt().with_env_filter(filter).with_target(true).init();
}

/// Create the product store selected by the database URL scheme
async fn create_product_store(config: &ServerConfig) -> ServerResult<Arc<dyn ProductRepository>> {
    if config.database_url.starts_with("memory://") {
        // Use in-memory product store for development and testing
        tracing::info!("Using in-memory product store");
        Ok(Arc::new(
            catalog_state_inmemory::InMemoryProductRepository::new(),
        ))
    } else if config.database_url.starts_with("postgres://")
        || config.database_url.starts_with("postgresql://")
    {
        tracing::info!("Using PostgreSQL product store");
        let pg_config = PostgresConfig {
            connection_string: config.database_url.clone(),
            ..PostgresConfig::default()
        };
        let provider = PostgresProductStoreProvider::connect(&pg_config)
            .await
            .map_err(ServerError::from)?;
        Ok(provider.product_repository())
    } else {
        Err(ServerError::ConfigurationError(format!(
            "Unsupported database URL: {}",
            config.database_url
        )))
    }
}
