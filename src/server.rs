//! HTTP server initialization and runtime setup.
//!
//! Handles database connection establishment, schema initialization, and the
//! Axum server lifecycle including graceful shutdown.

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::application::services::DomainService;
use crate::config::Config;
use crate::infrastructure::persistence::{PgDomainRepository, connect_with_retry};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Startup sequence:
/// 1. Connect to PostgreSQL, retrying with exponential backoff
/// 2. Apply the schema migration (idempotent)
/// 3. Wire repositories and services into [`AppState`]
/// 4. Bind the listener and serve until SIGINT/SIGTERM
///
/// The listener is not bound until the database is reachable, so the service
/// never accepts traffic against an unreachable store.
///
/// # Errors
///
/// Returns an error if:
/// - All database connection attempts fail
/// - Schema initialization fails
/// - Server bind fails or a server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_with_retry(&config).await?;

    tracing::info!("Initializing database tables");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to initialize database schema")?;

    let pool = Arc::new(pool);
    let domain_repository = Arc::new(PgDomainRepository::new(pool.clone()));
    let domain_service = Arc::new(DomainService::new(domain_repository));

    let state = AppState { domain_service };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down, closing database pool");
    pool.close().await;

    Ok(())
}

/// Resolves when SIGINT (Ctrl+C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
