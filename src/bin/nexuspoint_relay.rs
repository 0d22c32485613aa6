//! nexuspoint-relay: HTTP-to-HTTP JSON relay
//!
//! Serves `GET /users` by fetching `/get-users` from the central HTTP
//! surface.
//!
//! ## Configuration
//! - relay.http.port: HTTP listener (default: 8081)
//! - relay.upstream_url: central HTTP base URL (default: http://localhost:8080)
//! - relay.timeout_secs: upstream request timeout (default: 10)

use clap::Parser;
use tracing::{error, info};

use nexuspoint::config::Config;
use nexuspoint::handlers::relay::{router, Relay};
use nexuspoint::transport::serve_http;
use nexuspoint::utils::bootstrap::{init_tracing, Cli};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    info!("Starting nexuspoint-relay service");

    let config = Config::load(cli.config.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let relay = Relay::new(&config.relay)?;
    info!(upstream = %config.relay.upstream_url, "Relay configured");

    tokio::select! {
        result = serve_http(router(relay), &config.relay.http, "relay") => {
            result.map_err(|e| {
                error!(error = %e, "HTTP server failed");
                e
            })?;
            Err("HTTP server stopped".into())
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Shutting down nexuspoint-relay");
            Ok(())
        }
    }
}
