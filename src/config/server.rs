//! Listener configuration for the central process and the JSON relay.

use serde::Deserialize;

use crate::transport::TcpConfig;

/// Central process configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CentralConfig {
    /// gRPC listener shared by every registered service.
    pub grpc: TcpConfig,
    /// HTTP listener serving the in-process JSON routes.
    pub http: TcpConfig,
}

impl Default for CentralConfig {
    fn default() -> Self {
        Self {
            grpc: TcpConfig::with_port(50051),
            http: TcpConfig::with_port(8080),
        }
    }
}

/// JSON relay configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// HTTP listener for the relay.
    pub http: TcpConfig,
    /// Base URL of the central HTTP surface.
    pub upstream_url: String,
    /// Timeout for each upstream request, in seconds.
    pub timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            http: TcpConfig::with_port(8081),
            upstream_url: "http://localhost:8080".to_string(),
            timeout_secs: 10,
        }
    }
}
