//! Bootstrap utilities for nexuspoint binaries.
//!
//! Shared initialization code for the central, gateway and relay processes.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LOG_ENV_VAR;

/// Command line shared by every nexuspoint binary.
#[derive(Debug, Parser)]
#[command(version, about = "nexuspoint gRPC service and HTTP gateways")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Initialize tracing with the NEXUSPOINT_LOG environment variable.
///
/// Defaults to "info" level if NEXUSPOINT_LOG is not set.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
