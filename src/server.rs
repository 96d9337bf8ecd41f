// src/server.rs
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::config::{ServiceConfig, PORT_FALLBACK_RANGE};
use crate::error::AppError;
use crate::routes;
use crate::state::AppState;

/// Binds `host:port`, moving on to the following ports while the address is in use.
pub async fn bind(config: &ServiceConfig) -> Result<(TcpListener, SocketAddr), AppError> {
    let mut last_error = None;
    for offset in 0..=PORT_FALLBACK_RANGE {
        let Some(port) = config.port.checked_add(offset) else { break };
        let addr = SocketAddr::from((config.host, port));
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                let addr = listener.local_addr()?;
                return Ok((listener, addr));
            }
            Err(e) => {
                if offset == 0 {
                    warn!(%addr, error = %e, "Port in use, trying next");
                }
                last_error = Some(e);
            }
        }
    }

    Err(last_error.map(AppError::from).unwrap_or_else(|| {
        AppError::config(format!("no port available from {} on {}", config.port, config.host))
    }))
}

/// Generates the catalog once and serves it until Ctrl+C or SIGTERM.
pub async fn run(config: ServiceConfig) -> Result<(), AppError> {
    let state = AppState::new(Catalog::generate());
    info!(products = state.catalog.products().len(), "Catalog generated");

    let (listener, addr) = bind(&config).await?;
    info!("Server running on http://{addr}");

    axum::serve(listener, routes::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
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
}

#[cfg(test)]
mod tests {
    use super::bind;
    use crate::config::ServiceConfig;

    #[tokio::test]
    async fn bind_skips_a_port_in_use() {
        let (first, first_addr) = bind(&ServiceConfig { host: "127.0.0.1".parse().unwrap(), port: 0 })
            .await
            .unwrap();

        let config = ServiceConfig { host: first_addr.ip(), port: first_addr.port() };
        let (_second, second_addr) = bind(&config).await.unwrap();

        assert_ne!(second_addr.port(), first_addr.port());
        drop(first);
    }
}
