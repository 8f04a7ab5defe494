//! Admin endpoints: /health, /stats

use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use hexfield_core::grid::DATA_RESOLUTION;
use serde::Serialize;
use std::sync::Arc;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
///
/// GET /health
pub async fn health() -> Json<HealthResponse> {
    tracing::debug!("health check requested");
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Dataset statistics response
#[derive(Serialize)]
pub struct StatsResponse {
    /// Number of readings in the dataset
    pub readings: usize,
    /// Cell resolution of the readings
    pub resolution: u8,
    /// Generation region
    pub center_lat: f64,
    pub center_lng: f64,
    pub radius_km: f64,
    /// Server uptime in seconds
    pub uptime_secs: u64,
    /// Server version
    pub version: &'static str,
}

/// Dataset statistics endpoint
///
/// GET /stats
///
/// Returns the shape of the startup-generated dataset plus uptime.
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    Json(StatsResponse {
        readings: state.dataset.len(),
        resolution: u8::from(DATA_RESOLUTION),
        center_lat: state.config.center_lat,
        center_lng: state.config.center_lng,
        radius_km: state.config.radius_km,
        uptime_secs: state.uptime_secs(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
