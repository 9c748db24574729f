use catalog_core::CoreError;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Database connection manager for Postgres
#[derive(Clone)]
pub struct PostgresConnection {
    pub(crate) pool: PgPool,
}

impl PostgresConnection {
    /// Create a new PostgreSQL connection pool
    pub async fn new(
        connection_string: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, CoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(connection_string)
            .await
            .map_err(|e| {
                CoreError::StateStoreError(format!("Failed to connect to database: {}", e))
            })?;

        Ok(Self { pool })
    }

    /// Get a reference to the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
