//! Lazily initialised PostgreSQL connection pool shared by all server functions.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Get the shared pool, connecting on first use.
///
/// Reads `DATABASE_URL` (loading `.env` if present) and optionally
/// `DATABASE_MAX_CONNECTIONS` to size the pool.
pub async fn get_pool() -> Result<&'static PgPool, sqlx::Error> {
    POOL.get_or_try_init(connect).await
}

async fn connect() -> Result<PgPool, sqlx::Error> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| sqlx::Error::Configuration("DATABASE_URL must be set".into()))?;

    let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);

    tracing::debug!(max_connections, "connecting to database");

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await
}
