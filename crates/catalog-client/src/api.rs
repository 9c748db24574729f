//! REST API client for the Catalog service
//!
//! Thin wrapper over reqwest: one method per Resource API operation, with
//! the server's error envelope parsed into `ClientError::Api`.

use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::Value;
use std::env;
use std::time::Duration;

use catalog_core::{Product, ProductFields, ProductId};

use crate::error::ClientError;

/// Default API base URL for local development
pub const DEFAULT_API_URL: &str = "http://localhost:5001";

/// Response for a successful delete
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Client for the Catalog Resource API
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base URL of the API
    base_url: String,

    /// HTTP client
    client: Client,
}

impl ApiClient {
    /// Create a new ApiClient against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { base_url, client }
    }

    /// Create a client configured from `CATALOG_API_URL`, falling back to
    /// the local default
    pub fn from_env() -> Self {
        let base_url = env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    /// Get the URL for the product collection
    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// Get the URL for a specific product
    fn product_url(&self, id: ProductId) -> String {
        format!("{}/{}", self.products_url(), id)
    }

    /// Fetch all products
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let response = self.client.get(self.products_url()).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Create a product from the given fields
    pub async fn create_product(&self, fields: &ProductFields) -> Result<Product, ClientError> {
        let response = self
            .client
            .post(self.products_url())
            .json(fields)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Replace all fields of an existing product
    pub async fn update_product(
        &self,
        id: ProductId,
        fields: &ProductFields,
    ) -> Result<Product, ClientError> {
        let response = self
            .client
            .put(self.product_url(id))
            .json(fields)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Delete a product
    pub async fn delete_product(&self, id: ProductId) -> Result<DeleteResponse, ClientError> {
        let response = self.client.delete(self.product_url(id)).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Turn a non-success response into the API error it carries
    async fn check_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        let message = body["error"]
            .as_str()
            .unwrap_or("Unexpected server error")
            .to_string();

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
