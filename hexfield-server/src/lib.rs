//! Hexfield HTTP Server
//!
//! A thin HTTP REST API over the `hexfield-core` query engine. The
//! dataset is generated once during startup and served read-only:
//!
//! - `GET /hex?parent_hex=<cell>` — readings under an ancestor cell
//! - `GET /bbox?border=<lat1/lon1,...>` — readings inside a polygon
//! - `GET /avg?resolution=<0..12>` — median levels per (cell, category)
//! - `GET /health`, `GET /stats` — liveness and dataset shape
//!
//! # Example
//!
//! ```ignore
//! use hexfield_server::{HexfieldServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::default();
//!     let server = HexfieldServer::new(config).unwrap();
//!     server.run().await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
pub use telemetry::init_logging;

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Hexfield HTTP server: generated dataset plus configured router.
pub struct HexfieldServer {
    state: Arc<AppState>,
    router: Router,
}

impl HexfieldServer {
    /// Generate the dataset and build the router.
    pub fn new(config: ServerConfig) -> hexfield_core::Result<Self> {
        let state = Arc::new(AppState::new(config)?);
        let router = routes::build_router(state.clone());
        Ok(Self { state, router })
    }

    /// Get a reference to the application state.
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Get the router for testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind the listen address and serve until the process exits.
    pub async fn run(self) -> std::io::Result<()> {
        let addr = self.state.config.listen_addr;
        let listener = TcpListener::bind(addr).await?;

        info!(
            addr = %addr,
            readings = self.state.dataset.len(),
            "hexfield server listening"
        );

        axum::serve(listener, self.router).await
    }
}
