//! Application state management
//!
//! The dataset is generated exactly once, on the single startup thread,
//! and never mutated afterwards. Handlers share it through
//! `Arc<AppState>`; every query is a pure read, so no locking is needed.

use crate::config::ServerConfig;
use hexfield_core::{generate, Dataset};
use std::time::Instant;

/// Shared application state: the immutable dataset plus configuration.
#[derive(Debug)]
pub struct AppState {
    /// The startup-generated readings dataset.
    pub dataset: Dataset,
    /// Server configuration.
    pub config: ServerConfig,
    /// Startup instant, for uptime reporting.
    started_at: Instant,
}

impl AppState {
    /// Generate the dataset from the configured region and wrap it with
    /// the configuration.
    pub fn new(config: ServerConfig) -> hexfield_core::Result<Self> {
        let dataset = generate(&config.generator_config())?;
        tracing::info!(
            readings = dataset.len(),
            center_lat = config.center_lat,
            center_lng = config.center_lng,
            radius_km = config.radius_km,
            "dataset generated"
        );
        Ok(Self {
            dataset,
            config,
            started_at: Instant::now(),
        })
    }

    /// Seconds since the server state was constructed.
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
