//! HTTP server startup logic.
//!
//! Binds a plain TCP listener and serves the router until the process is killed.
//! There is no graceful shutdown: in-flight connections are dropped on exit.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::{AppConfig, ConfigError};

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind server to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Bind the listening socket.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on an already bound listener.
///
/// Per-connection write failures are handled inside the connection driver and
/// never reach this function.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server fails.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config.http.socket_addr()?;

    let listener = match bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind listener");
            return Err(e);
        }
    };

    let local_addr = listener.local_addr().unwrap_or(addr);
    tracing::info!(addr = %local_addr, "Starting HTTP server at http://{}", local_addr);

    serve(listener, app).await
}
