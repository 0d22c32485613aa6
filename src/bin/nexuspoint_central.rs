//! nexuspoint-central: gRPC services plus their local JSON routes
//!
//! Hosts `user.v1.UserService`, `product.v1.ProductService` and the gRPC
//! health service on one listener. The same process also serves the
//! translator routes over HTTP, calling the handlers in-process.
//!
//! ## Configuration
//! - central.grpc.port: gRPC listener (default: 50051)
//! - central.http.port: HTTP listener (default: 8080)
//! - NEXUSPOINT_LOG: tracing filter (default: info)
//!
//! If either listener stops, the process exits with an error.

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use nexuspoint::clients::LocalCentral;
use nexuspoint::config::Config;
use nexuspoint::handlers::gateway::{router, GatewayState};
use nexuspoint::registry::ServiceRegistry;
use nexuspoint::services::{ProductHandler, UserHandler};
use nexuspoint::store::RecordStore;
use nexuspoint::transport::serve_http;
use nexuspoint::utils::bootstrap::{init_tracing, Cli};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    info!("Starting nexuspoint-central service");

    let config = Config::load(cli.config.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let store = Arc::new(RecordStore::seeded());

    let mut registry = ServiceRegistry::new();
    registry
        .register(UserHandler::new(store.clone()).into_server())?
        .register(ProductHandler::new(store.clone()).into_server())?;

    let http = router(GatewayState::from_client(LocalCentral::new(store)));

    tokio::select! {
        result = registry.serve(&config.central.grpc) => {
            result.map_err(|e| {
                error!(error = %e, "gRPC server failed");
                e
            })?;
            Err("gRPC server stopped".into())
        }
        result = serve_http(http, &config.central.http, "central") => {
            result.map_err(|e| {
                error!(error = %e, "HTTP server failed");
                e
            })?;
            Err("HTTP server stopped".into())
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Shutting down nexuspoint-central");
            Ok(())
        }
    }
}
