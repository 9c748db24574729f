use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::Row;
use tracing::debug;

use catalog_core::{CoreError, Product, ProductId, ProductInput, ProductRepository};

use crate::PostgresConnection;

/// Postgres implementation of the ProductRepository
#[derive(Clone)]
pub struct PostgresProductRepository {
    conn: PostgresConnection,
}

impl PostgresProductRepository {
    /// Create a new Postgres product repository
    pub fn new(conn: PostgresConnection) -> Self {
        Self { conn }
    }
}

fn product_from_row(row: &PgRow) -> Result<Product, CoreError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| CoreError::StateStoreError(format!("Error reading id column: {}", e)))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| CoreError::StateStoreError(format!("Error reading name column: {}", e)))?;
    let description: String = row.try_get("description").map_err(|e| {
        CoreError::StateStoreError(format!("Error reading description column: {}", e))
    })?;
    let price: f64 = row
        .try_get("price")
        .map_err(|e| CoreError::StateStoreError(format!("Error reading price column: {}", e)))?;
    let quantity: i64 = row
        .try_get("quantity")
        .map_err(|e| CoreError::StateStoreError(format!("Error reading quantity column: {}", e)))?;

    Ok(Product {
        id: ProductId(id),
        name,
        description,
        price,
        quantity,
    })
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, CoreError> {
        let query = "
            SELECT id, name, description, price, quantity
            FROM products
            ORDER BY id
        ";

        let rows = sqlx::query(query)
            .fetch_all(self.conn.pool())
            .await
            .map_err(|e| CoreError::StateStoreError(format!("Failed to list products: {}", e)))?;

        rows.iter().map(product_from_row).collect()
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, CoreError> {
        let query = "
            SELECT id, name, description, price, quantity
            FROM products
            WHERE id = $1
        ";

        let row = sqlx::query(query)
            .bind(id.0)
            .fetch_optional(self.conn.pool())
            .await
            .map_err(|e| CoreError::StateStoreError(format!("Failed to fetch product: {}", e)))?;

        row.as_ref().map(product_from_row).transpose()
    }

    async fn insert(&self, input: &ProductInput) -> Result<Product, CoreError> {
        let query = "
            INSERT INTO products (name, description, price, quantity)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price, quantity
        ";

        let row = sqlx::query(query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.quantity)
            .fetch_one(self.conn.pool())
            .await
            .map_err(|e| CoreError::StateStoreError(format!("Failed to insert product: {}", e)))?;

        let product = product_from_row(&row)?;
        debug!(id = %product.id, "Inserted product");
        Ok(product)
    }

    async fn update(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<Option<Product>, CoreError> {
        let query = "
            UPDATE products
            SET name = $1, description = $2, price = $3, quantity = $4
            WHERE id = $5
            RETURNING id, name, description, price, quantity
        ";

        let row = sqlx::query(query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.quantity)
            .bind(id.0)
            .fetch_optional(self.conn.pool())
            .await
            .map_err(|e| CoreError::StateStoreError(format!("Failed to update product: {}", e)))?;

        match row {
            Some(row) => {
                let product = product_from_row(&row)?;
                debug!(%id, "Updated product");
                Ok(Some(product))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &ProductId) -> Result<bool, CoreError> {
        let query = "
            DELETE FROM products
            WHERE id = $1
        ";

        let result = sqlx::query(query)
            .bind(id.0)
            .execute(self.conn.pool())
            .await
            .map_err(|e| CoreError::StateStoreError(format!("Failed to delete product: {}", e)))?;

        let removed = result.rows_affected() > 0;
        if removed {
            debug!(%id, "Deleted product");
        }
        Ok(removed)
    }
}
