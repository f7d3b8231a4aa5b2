//! PostgreSQL connection pool management.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use reviews_common::config::DatabaseConfig;

/// Maximum time to wait for a connection from the pool.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Idle time after which a pooled connection is closed.
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);

/// Maximum lifetime of a pooled connection.
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Embedded schema migrations from the `migrations/` directory.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Create a connection pool from the given settings.
///
/// # Errors
///
/// Returns an error when the database is unreachable or the URL is
/// malformed.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "database pool created"
    );

    Ok(pool)
}

/// Create a connection pool from environment variables, falling back to
/// local-development defaults.
///
/// # Errors
///
/// Returns an error when the database is unreachable.
pub async fn create_pool_from_env() -> Result<PgPool, sqlx::Error> {
    let config = DatabaseConfig::from_env();
    create_pool(&config).await
}

/// Apply any pending migrations.
///
/// # Errors
///
/// Returns an error when a migration fails to apply.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await?;
    info!("database migrations applied");
    Ok(())
}
