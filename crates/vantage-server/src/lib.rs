//! # vantage-server
//!
//! The enrichment HTTP surface:
//!
//! - `POST /api/enrich` with `{url, companyName}` → the enrichment record,
//!   or `{"error": ...}` with 400 (bad input) / 500 (upstream failure).
//! - `GET /healthz` → 200.

pub mod error;
pub mod routes;

pub use error::{ApiError, ErrorBody, ServerError};

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tracing::{info, warn};

use vantage_config::ServerConfig;
use vantage_enrich::{ContentGenerator, Enricher};

/// Build the application router around a shared enricher.
pub fn router<G>(enricher: Arc<Enricher<G>>) -> Router
where
    G: ContentGenerator + 'static,
{
    Router::new()
        .route("/healthz", get(routes::healthz))
        .route("/api/enrich", post(routes::enrich::<G>))
        .with_state(enricher)
}

/// Bind the configured `host:port`.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] when the address is unavailable.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    let addr = config.bind_address();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on `listener` until Ctrl-C.
///
/// # Errors
///
/// Returns [`ServerError::Io`] if the accept loop fails.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "server listening");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
