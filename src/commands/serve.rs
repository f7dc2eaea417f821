//! HTTP server command

use crate::config::ServerConfig;
use crate::output::print_server_banner;
use crate::web::router;
use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Run the HTTP server on a fresh tokio runtime until Ctrl-C
///
/// # Errors
///
/// Returns an error if the runtime cannot start or the server fails.
pub fn serve(config: &ServerConfig) -> Result<()> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?
        .block_on(run_server(config))
}

/// Bind the configured address and serve the game API
///
/// # Errors
///
/// Returns an error if the address cannot be bound or serving fails.
pub async fn run_server(config: &ServerConfig) -> Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local_addr = listener.local_addr()?;

    print_server_banner(local_addr);
    info!(%local_addr, "server listening");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
