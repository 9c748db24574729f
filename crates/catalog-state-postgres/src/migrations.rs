use catalog_core::CoreError;
use tracing::info;

use crate::PostgresConnection;

/// SQL migrations for the PostgreSQL product store
///
/// Each batch is idempotent (`IF NOT EXISTS`), so the whole list is applied
/// on every startup.
pub fn generate_migrations() -> Vec<(&'static str, &'static str)> {
    vec![(
        "20250301000000_initial_schema",
        r#"
        -- Create products table
        CREATE TABLE IF NOT EXISTS products (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            quantity BIGINT NOT NULL
        );
        "#,
    )]
}

/// Apply all migrations against the given connection
pub async fn run(conn: &PostgresConnection) -> Result<(), CoreError> {
    info!("Running database migrations");

    for (name, sql) in generate_migrations() {
        sqlx::raw_sql(sql)
            .execute(conn.pool())
            .await
            .map_err(|e| {
                CoreError::StateStoreError(format!("Failed to run migration {}: {}", name, e))
            })?;
    }

    info!("Migrations completed successfully");
    Ok(())
}
