//! Server configuration

use clap::Parser;
use hexfield_core::{GeneratorConfig, GeoPoint};
use std::net::SocketAddr;

/// Hexfield server configuration, parsed from CLI flags with env
/// fallbacks.
#[derive(Parser, Debug, Clone)]
#[command(name = "hexfield-server")]
#[command(about = "HTTP API server for synthetic H3 readings queries")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "HEXFIELD_LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen_addr: SocketAddr,

    /// Latitude of the dataset center, degrees
    #[arg(long, env = "HEXFIELD_CENTER_LAT", default_value = "56.0")]
    pub center_lat: f64,

    /// Longitude of the dataset center, degrees
    #[arg(long, env = "HEXFIELD_CENTER_LNG", default_value = "38.0")]
    pub center_lng: f64,

    /// Radius of the generated region in kilometers
    #[arg(long, env = "HEXFIELD_RADIUS_KM", default_value = "7.0")]
    pub radius_km: f64,

    /// Kilometers per traversal ring for the disk over-fetch (tuned for
    /// resolution 12)
    #[arg(long, env = "HEXFIELD_RING_STEP_KM", default_value = "0.5")]
    pub ring_step_km: f64,

    /// RNG seed for reproducible datasets (unseeded when omitted)
    #[arg(long, env = "HEXFIELD_SEED")]
    pub seed: Option<u64>,

    /// Enable CORS (Cross-Origin Resource Sharing)
    #[arg(long, env = "HEXFIELD_CORS_ENABLED", default_value = "true")]
    pub cors_enabled: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "HEXFIELD_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".parse().expect("valid default addr"),
            center_lat: 56.0,
            center_lng: 38.0,
            radius_km: 7.0,
            ring_step_km: 0.5,
            seed: None,
            cors_enabled: true,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Dataset generation parameters derived from this configuration.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            center: GeoPoint::new(self.center_lat, self.center_lng),
            radius_km: self.radius_km,
            ring_step_km: self.ring_step_km,
            seed: self.seed,
            ..GeneratorConfig::default()
        }
    }
}
