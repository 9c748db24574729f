//! Product resource handlers
//!
//! This module contains the handlers for the /products routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use catalog_core::{ProductFields, ProductId};

use crate::api::errors::api_error_response;
use crate::server::CatalogServer;

/// Response for a successful delete
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Handler for listing all products
pub async fn list_products_handler(State(server): State<Arc<CatalogServer>>) -> impl IntoResponse {
    info!("Listing all products");

    match server.list_products().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(err) => {
            error!(?err, "Failed to list products");
            api_error_response(&err)
        }
    }
}

/// Handler for creating a product
pub async fn create_product_handler(
    State(server): State<Arc<CatalogServer>>,
    Json(fields): Json<ProductFields>,
) -> impl IntoResponse {
    info!("Creating product");

    match server.create_product(&fields).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(err) => {
            error!(?err, "Failed to create product");
            api_error_response(&err)
        }
    }
}

/// Handler for updating a product
pub async fn update_product_handler(
    State(server): State<Arc<CatalogServer>>,
    Path(id): Path<i64>,
    Json(fields): Json<ProductFields>,
) -> impl IntoResponse {
    info!(%id, "Updating product");

    match server.update_product(ProductId(id), &fields).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(err) => {
            error!(?err, %id, "Failed to update product");
            api_error_response(&err)
        }
    }
}

/// Handler for deleting a product
pub async fn delete_product_handler(
    State(server): State<Arc<CatalogServer>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!(%id, "Deleting product");

    match server.delete_product(ProductId(id)).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteResponse {
                message: "Product deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            error!(?err, %id, "Failed to delete product");
            api_error_response(&err)
        }
    }
}
