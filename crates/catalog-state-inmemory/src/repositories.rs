use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use async_trait::async_trait;
use catalog_core::{CoreError, Product, ProductId, ProductInput, ProductRepository};

struct Inner {
    rows: HashMap<i64, Product>,
    // Monotonic; deleted ids are never handed out again.
    next_id: i64,
}

/// In-memory implementation of the ProductRepository
pub struct InMemoryProductRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryProductRepository {
    /// Create a new, empty in-memory product repository
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                rows: HashMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, CoreError> {
        let inner = self.inner.read().await;
        let mut products: Vec<Product> = inner.rows.values().cloned().collect();
        products.sort_by_key(|product| product.id);
        Ok(products)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, CoreError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.get(&id.0).cloned())
    }

    async fn insert(&self, input: &ProductInput) -> Result<Product, CoreError> {
        let mut inner = self.inner.write().await;
        let id = ProductId(inner.next_id);
        inner.next_id += 1;

        let product = Product::from_input(id, input);
        inner.rows.insert(id.0, product.clone());
        debug!(%id, "Inserted product");
        Ok(product)
    }

    async fn update(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<Option<Product>, CoreError> {
        let mut inner = self.inner.write().await;
        if !inner.rows.contains_key(&id.0) {
            return Ok(None);
        }

        let product = Product::from_input(*id, input);
        inner.rows.insert(id.0, product.clone());
        debug!(%id, "Updated product");
        Ok(Some(product))
    }

    async fn delete(&self, id: &ProductId) -> Result<bool, CoreError> {
        let mut inner = self.inner.write().await;
        let removed = inner.rows.remove(&id.0).is_some();
        if removed {
            debug!(%id, "Deleted product");
        }
        Ok(removed)
    }
}
