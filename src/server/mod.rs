//! HTTP service adapter exposing the resolution engine.
//!
//! Routes:
//! - `GET /health` - static ok status.
//! - `GET /content-type?url=<URL>` - redirect-then-content-type resolution.
//!
//! The router carries one shared [`ResolutionEngine`] as state; resolution
//! calls are stateless, so concurrent requests need no coordination. When a
//! client disconnects, axum drops the handler future and with it the
//! in-flight probe, releasing the outbound connection.

mod error;
mod handlers;

pub use error::HttpError;
pub use handlers::{ContentTypeBody, ContentTypeParams, HealthBody};

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::info;

use crate::resolver::ResolutionEngine;

/// Default bind host (all interfaces).
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8080;

/// Shared state handed to every handler.
pub type AppState = Arc<ResolutionEngine>;

/// Bind configuration for the service adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host or address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Creates the service router with all routes wired to `engine`.
///
/// Exposed separately from [`run`] so tests can drive the router through
/// `tower::ServiceExt::oneshot` without binding a socket.
#[must_use]
pub fn create_router(engine: Arc<ResolutionEngine>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/content-type", get(handlers::content_type))
        .with_state(engine)
}

/// Binds the configured address and serves requests until shutdown.
///
/// # Errors
///
/// Returns an error when the bind address is invalid, the socket cannot be
/// bound, or the server loop fails.
pub async fn run(config: ServerConfig, engine: ResolutionEngine) -> anyhow::Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "content-type service listening");

    let router = create_router(Arc::new(engine));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    // Serve until interrupted; bail out quietly if the signal handler
    // cannot be installed.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
