//! HTTP front end for the tankfinder search engine.
//!
//! Routes:
//!
//! - `GET /api/search/` - catalog search, parameters as in [`SearchParams`]
//! - `GET /api/models/` - model autocomplete (`tank_type`, `q`)
//! - `GET /health` - liveness probe
//!
//! Validation failures answer `400` and any other failure `500`, both with a
//! `{"error": "..."}` body.
//!
//! [`SearchParams`]: tankfinder::SearchParams

mod error;
mod handlers;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use tankfinder::SearchEngine;
use tokio::net::TcpListener;

pub use error::ApiError;
pub use handlers::ModelsQuery;

/// Listener settings, read from the `[server]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `127.0.0.1:8000`.
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8000".to_string(),
        }
    }
}

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SearchEngine>,
}

/// Build the application router around `engine`.
pub fn router(engine: Arc<SearchEngine>) -> Router {
    Router::new()
        .route("/api/search/", get(handlers::search))
        .route("/api/models/", get(handlers::models))
        .route("/health", get(handlers::health))
        .with_state(AppState { engine })
}

/// Bind `config.addr` and serve until the process is stopped.
pub async fn serve(config: &ServerConfig, engine: Arc<SearchEngine>) -> Result<()> {
    let listener = TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;
    let local_addr = listener.local_addr().context("Failed to read bound address")?;
    tracing::info!("tankfinder server listening on http://{local_addr}");

    axum::serve(listener, router(engine))
        .await
        .context("HTTP server terminated")?;
    Ok(())
}
