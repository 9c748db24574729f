//! Client State Cache
//!
//! An ordered local mirror of the product collection, refreshed from the
//! Resource API and patched only after the server confirms a mutation.

use tracing::{debug, warn};

use catalog_core::{Product, ProductFields, ProductId};

use crate::api::ApiClient;
use crate::error::ClientError;

/// Local mirror of the product collection
///
/// Every mutation is gated on server confirmation; on failure the cache is
/// left exactly as it was. The cache can still diverge from the store when
/// other clients write - `reload` resynchronizes.
pub struct ProductCache {
    client: ApiClient,
    products: Vec<Product>,
}

impl ProductCache {
    /// Create an empty cache over the given API client
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            products: Vec::new(),
        }
    }

    /// The cached products, in listing order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Find a cached product by id
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// True when the id is currently cached
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Replace the whole cache with the server's current listing
    ///
    /// Listing is a best-effort refresh: on failure the existing cache is
    /// kept and the error is only logged.
    pub async fn reload(&mut self) {
        match self.client.list_products().await {
            Ok(products) => {
                debug!(count = products.len(), "Reloaded product cache");
                self.products = products;
            }
            Err(err) => {
                warn!(%err, "Failed to refresh product list");
            }
        }
    }

    /// Submit a draft: update when the edit target is still cached,
    /// create otherwise
    ///
    /// Targets are addressed by id, so a reload between selecting the edit
    /// target and submitting cannot retarget the write. On success the one
    /// matching entry is replaced in place (update) or the new entry is
    /// appended (create). On failure the cache is untouched and the error
    /// carries the server's message.
    pub async fn submit(
        &mut self,
        fields: &ProductFields,
        edit_target: Option<ProductId>,
    ) -> Result<Product, ClientError> {
        match edit_target.filter(|id| self.contains(*id)) {
            Some(id) => {
                let updated = self.client.update_product(id, fields).await?;
                if let Some(entry) = self.products.iter_mut().find(|p| p.id == id) {
                    *entry = updated.clone();
                }
                Ok(updated)
            }
            None => {
                let created = self.client.create_product(fields).await?;
                self.products.push(created.clone());
                Ok(created)
            }
        }
    }

    /// Delete a product and, once the server confirms, drop it locally
    pub async fn remove(&mut self, id: ProductId) -> Result<(), ClientError> {
        self.client.delete_product(id).await?;
        self.products.retain(|product| product.id != id);
        Ok(())
    }
}
