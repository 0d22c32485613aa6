//! Gateway configuration: where it listens and how it reaches central.

use serde::Deserialize;

pub use nexuspoint_client::UpstreamConfig;

use crate::transport::TcpConfig;

/// HTTP gateway configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP listener for the gateway.
    pub http: TcpConfig,
    /// Central gRPC endpoint, timeouts and startup attempts.
    pub upstream: UpstreamConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            http: TcpConfig::with_port(8082),
            upstream: UpstreamConfig::default(),
        }
    }
}
