//! Server lifecycle.

use crate::page::Dashboard;
use crate::routes::create_router;
use salesdash_common::Result;
use salesdash_config::Config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Binds the configured address and serves until Ctrl-C or SIGTERM.
pub async fn serve(config: &Config, dashboard: Arc<Dashboard>) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    info!("Dashboard listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(dashboard))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {e}");
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
                tracing::warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
