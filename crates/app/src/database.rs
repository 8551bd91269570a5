//! Database connection management

use sqlx::{PgPool, migrate::MigrateError, postgres::PgPoolOptions};
use tracing::info;

/// Default upper bound for pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    connect_with(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Connect to `PostgreSQL` with an explicit pool size.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_with(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Apply the workspace migrations.
///
/// # Errors
///
/// Returns an error when a migration fails or the recorded history diverges.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await?;

    info!("database migrations applied");

    Ok(())
}
