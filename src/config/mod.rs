//! Application configuration.
//!
//! Aggregates configuration for every binary into a single Config struct
//! that can be loaded from YAML files or environment variables.

mod client;
mod server;

pub use client::{GatewayConfig, UpstreamConfig};
pub use server::{CentralConfig, RelayConfig};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "NEXUSPOINT_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "NEXUSPOINT";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "NEXUSPOINT_LOG";

use std::path::Path;

use serde::Deserialize;

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Central process (gRPC services plus local HTTP routes).
    pub central: CentralConfig,
    /// HTTP-to-gRPC gateway.
    pub gateway: GatewayConfig,
    /// HTTP-to-HTTP JSON relay.
    pub relay: RelayConfig,
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// Configuration sources (in order of priority, later overrides earlier):
    /// 1. `config.yaml` in current directory (if exists)
    /// 2. File specified by `path` argument (if provided, usually `--config`)
    /// 3. File specified by `CONFIG_ENV_VAR` environment variable (if set)
    /// 4. Environment variables with `CONFIG_ENV_PREFIX` prefix, `__` separated
    ///    (e.g. `NEXUSPOINT__GATEWAY__UPSTREAM__ADDRESS`)
    pub fn load(path: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let mut builder = ConfigLib::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(
                File::from(config_path)
                    .format(FileFormat::Yaml)
                    .required(true),
            );
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
