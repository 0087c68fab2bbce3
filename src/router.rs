use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::PulseError;
use crate::handlers::{
    calculate::calculate_handler, lookup::lookup_handler, not_found_handler,
    status::status_handler,
};
use crate::service::prober::ConnectivityProber;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct PulseState {
    pub prober: Arc<ConnectivityProber>,
}

impl PulseState {
    pub fn new(prober: ConnectivityProber) -> Self {
        Self {
            prober: Arc::new(prober),
        }
    }
}

pub fn pulse_router(state: PulseState) -> Router {
    Router::new()
        .route("/", get(status_handler))
        .route("/calculate", post(calculate_handler))
        .route("/lookup", get(lookup_handler))
        .route("/api/lookup", get(lookup_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C / SIGTERM.
pub async fn serve(addr: &str, app: Router) -> Result<(), PulseError> {
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
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
    info!("shutdown signal received");
}
