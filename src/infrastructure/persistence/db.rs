//! Database connection establishment with startup retry.
//!
//! The service must not accept traffic against an unreachable store, so the
//! pool is built before the listener binds. Connection attempts are retried
//! with exponential backoff (2, 4, 8, 16 seconds, at most
//! [`MAX_CONNECT_ATTEMPTS`] attempts total); exhaustion aborts startup.

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::ExponentialBackoff;

use crate::config::Config;

/// Maximum number of connection attempts before startup fails.
pub const MAX_CONNECT_ATTEMPTS: u32 = 5;

/// Backoff schedule between connection attempts: 2s, 4s, 8s, 16s.
fn backoff_schedule() -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(2)
        .factor(1000)
        .take((MAX_CONNECT_ATTEMPTS - 1) as usize)
}

/// Builds the connection pool, retrying until the database is reachable.
///
/// # Errors
///
/// Returns an error once [`MAX_CONNECT_ATTEMPTS`] attempts have failed.
pub async fn connect_with_retry(config: &Config) -> Result<PgPool> {
    let attempt = AtomicU32::new(0);

    let pool = Retry::spawn(backoff_schedule(), || {
        let n = attempt.fetch_add(1, Ordering::Relaxed) + 1;
        async move {
            tracing::info!("Connecting to database (attempt {n}/{MAX_CONNECT_ATTEMPTS})");
            match try_connect(config).await {
                Ok(pool) => Ok(pool),
                Err(e) => {
                    tracing::error!("Database connection failed: {e}");
                    Err(e)
                }
            }
        }
    })
    .await
    .context("Max retries reached, could not connect to database")?;

    tracing::info!("Successfully connected to the database");
    Ok(pool)
}

/// Single connection attempt: build the pool and run a liveness probe.
///
/// Pooled connections are validated before reuse (`test_before_acquire`) and
/// recycled after `db_max_lifetime` seconds to avoid stale sockets.
async fn try_connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .test_before_acquire(true)
        .connect(&config.database_url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}
