//! Postgres pool shared by every repository

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connections held when `--max-connections` is not given.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connect to the Fyyur database with the default connection limit.
///
/// Connects eagerly, so a bad `DATABASE_URL` fails at startup rather than
/// on the first page load.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Same as [`create_pool`], capped at `max_connections`.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
