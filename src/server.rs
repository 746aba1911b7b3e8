//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, service wiring and the Axum server
//! lifecycle including graceful shutdown.

use crate::config::Config;
use crate::infrastructure::persistence::{
    PgAccessLogRepository, PgAnalyticsRepository, PgUrlRepository,
};
use crate::infrastructure::qr_code::PngQrCodeGenerator;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the PostgreSQL pool with the configured limits.
///
/// # Errors
///
/// Returns an error if the database is unreachable.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Builds the application state over PostgreSQL repositories.
pub fn build_state(pool: PgPool, config: &Config) -> AppState {
    let pool = Arc::new(pool);

    AppState::new(
        Arc::new(PgUrlRepository::new(pool.clone())),
        Arc::new(PgAccessLogRepository::new(pool.clone())),
        Arc::new(PgAnalyticsRepository::new(pool)),
        Arc::new(PngQrCodeGenerator::new(&config.qr_code_dir)),
    )
    .with_origin_settings(config.behind_proxy, config.public_scheme.clone())
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations
/// - Services and router
/// - Axum HTTP server, stopped by Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations applied");

    let state = build_state(pool.clone(), &config);
    let app = app_router(state, &config.qr_code_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
