//! Sky Calculator HTTP Server Binary
//!
//! Loads configuration, sets up logging and serves the calculator pages and
//! JSON API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin skycalc-server
//!
//! # Explicit config file and port
//! SKYCALC_CONFIG=/etc/skycalc.toml PORT=3000 cargo run --bin skycalc-server
//! ```
//!
//! # Environment Variables
//!
//! - `SKYCALC_CONFIG`: Path to a `skycalc.toml` file
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use skycalc::config::ServerConfig;
use skycalc::http::{create_router_with_settings, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;

    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(config.logging.level.parse().unwrap_or(Level::INFO))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Sky Calculator HTTP Server");

    let state = AppState::siderust();
    info!("Ephemeris '{}' ready", state.ephemeris.name());

    let app = create_router_with_settings(state, &config.server);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
