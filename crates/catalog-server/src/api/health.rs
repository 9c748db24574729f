//! Health check endpoint for the Catalog Server
//!
//! This module contains the health check handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::server::CatalogServer;

/// Health check handler
///
/// Reports the server version and whether the product store answers
/// queries.
pub async fn health_check(State(server): State<Arc<CatalogServer>>) -> impl IntoResponse {
    info!("Health check requested");

    let store_status = match server.check_store_health().await {
        Ok(true) => "UP",
        Ok(false) => "DEGRADED",
        Err(_) => "DOWN",
    };

    let response = json!({
        "status": if store_status == "UP" { "UP" } else { "DOWN" },
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "productStore": {
                "status": store_status,
            }
        },
    });

    let overall_status = if store_status == "UP" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (overall_status, Json(response))
}
