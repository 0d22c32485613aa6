//! nexuspoint-gateway: HTTP/JSON front end for the central gRPC service
//!
//! ## Architecture
//! ```text
//! [HTTP client] -> [nexuspoint-gateway] -> (one shared channel) -> [nexuspoint-central]
//! ```
//!
//! ## Configuration
//! - gateway.http.port: HTTP listener (default: 8082)
//! - gateway.upstream.address: central gRPC endpoint (default: localhost:50051)
//! - gateway.upstream.connect_attempts: startup connection attempts (default: 5)
//! - gateway.upstream.request_timeout_ms: per-call timeout (default: 10000)
//!
//! Startup fails once every connection attempt is used up.

use std::time::Duration;

use backon::Retryable;
use clap::Parser;
use tracing::{error, info, warn};

use nexuspoint::config::Config;
use nexuspoint::handlers::gateway::{router, GatewayState};
use nexuspoint::transport::serve_http;
use nexuspoint::utils::bootstrap::{init_tracing, Cli};
use nexuspoint::utils::retry::{connection_backoff, is_retryable_connect};
use nexuspoint_client::{CentralClient, ClientError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    info!("Starting nexuspoint-gateway service");

    let config = Config::load(cli.config.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let upstream = &config.gateway.upstream;
    let client = (|| CentralClient::connect(upstream))
        .retry(connection_backoff(upstream.connect_attempts))
        .when(is_retryable_connect)
        .notify(|err: &ClientError, dur: Duration| {
            warn!(service = "central", error = %err, delay = ?dur, "Connection failed, retrying");
        })
        .await
        .map_err(|e| {
            error!(
                address = %upstream.address,
                attempts = upstream.connect_attempts,
                error = %e,
                "Failed to connect to central service"
            );
            e
        })?;

    info!(address = %upstream.address, "Connected to central service");

    let app = router(GatewayState::from_client(client));

    tokio::select! {
        result = serve_http(app, &config.gateway.http, "gateway") => {
            result.map_err(|e| {
                error!(error = %e, "HTTP server failed");
                e
            })?;
            Err("HTTP server stopped".into())
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Shutting down nexuspoint-gateway");
            Ok(())
        }
    }
}
