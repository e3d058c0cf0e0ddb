//! Postgres connection pool and schema migrations.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::DbError;

/// Type alias for the shared Postgres pool used across the whole application.
pub type DbPool = PgPool;

/// How long a request waits for a free connection before the store call fails.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a pool against `database_url` holding at most `max_connections`.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, DbError> {
    info!("Connecting to database (max_connections={})", max_connections);
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Create or upgrade the `pets` table from the embedded `migrations/`
/// directory at the workspace root.
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    let migrator = sqlx::migrate!("../../migrations");
    info!("Applying up to {} migrations", migrator.migrations.len());
    migrator.run(pool).await?;
    Ok(())
}
