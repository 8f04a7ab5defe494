//! HTTP route handlers and router configuration

mod admin;
mod readings;

use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the main application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        // Health check + dataset stats
        .route("/health", get(admin::health))
        .route("/stats", get(admin::stats))
        // Query endpoints
        .route("/hex", get(readings::hex))
        .route("/bbox", get(readings::bbox))
        .route("/avg", get(readings::avg))
        .with_state(state.clone());

    // Add middleware
    router = router.layer(TraceLayer::new_for_http());

    // Add CORS if enabled
    if state.config.cors_enabled {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}
