//! Hexfield Server CLI
//!
//! Run with: `cargo run -p hexfield-server -- --help`

use clap::Parser;
use hexfield_server::{init_logging, HexfieldServer, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();

    init_logging(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.listen_addr,
        center_lat = config.center_lat,
        center_lng = config.center_lng,
        radius_km = config.radius_km,
        cors = config.cors_enabled,
        "starting hexfield server"
    );

    let server = HexfieldServer::new(config)?;
    server.run().await?;

    Ok(())
}
