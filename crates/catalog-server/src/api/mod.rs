//! API module for the Catalog Server
//!
//! This module contains the API routes and handlers for the Catalog Server.

use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod errors;
pub mod health;
pub mod products;

use crate::server::CatalogServer;

/// Build the router for API endpoints
pub fn build_router(server: Arc<CatalogServer>) -> Router {
    Router::new()
        // Product resource
        .route(
            "/products",
            get(products::list_products_handler).post(products::create_product_handler),
        )
        .route(
            "/products/:id",
            put(products::update_product_handler).delete(products::delete_product_handler),
        )
        // Health check
        .route("/health", get(health::health_check))
        // The form/list client is served from another origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        // Shared state
        .with_state(server)
}
