//! Connection provider: one pool per process, opened at startup and closed on shutdown.

use crate::config::DatabaseConfig;
use crate::error::{AppError, StoreError};
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Open the pool and verify it with a round-trip before handing it out.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    let options = config.connect_options()?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .map_err(StoreError::from)?;

    check_health(&pool).await?;
    tracing::info!(
        max_connections = config.max_connections,
        "database connection established"
    );
    Ok(pool)
}

/// Single `SELECT 1` round-trip, shared by startup and the readiness probe.
pub async fn check_health(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
