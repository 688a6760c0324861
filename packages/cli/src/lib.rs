use std::sync::Arc;

use anyhow::Context;
use todo_api::AppState;
use todo_config::constants::{DEFAULT_LOG_FILTER, RUST_LOG};
use todo_tasks::TaskStorage;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod api;
pub mod config;
pub mod middleware;

#[cfg(test)]
mod tests;

use config::Config;

/// Initialize tracing subscriber for structured logging
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(RUST_LOG)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(false) // Don't show module paths in logs
        .compact()
        .init();
}

/// Build the router with its middleware stack
pub fn build_app(config: &Config, state: AppState) -> anyhow::Result<axum::Router> {
    let app = api::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::create_panic_handler());

    let app = match &config.cors_origin {
        Some(origin) => {
            info!("CORS origin: {}", origin);
            app.layer(middleware::create_cors_layer(origin)?)
        }
        None => app,
    };

    Ok(app)
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let state = AppState::new(Arc::new(TaskStorage::new()));
    let app = build_app(&config, state)?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received, draining connections");
}
