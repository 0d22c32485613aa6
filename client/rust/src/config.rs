//! Upstream connection settings.

use std::time::Duration;

use serde::Deserialize;

/// How a gateway reaches the central service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Central gRPC address, `host:port` or a full `http://` URI.
    pub address: String,
    /// Upper bound on establishing the connection.
    pub connect_timeout_ms: u64,
    /// Upper bound on any single call over the shared channel.
    pub request_timeout_ms: u64,
    /// Total connection attempts at startup before giving up.
    pub connect_attempts: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: "localhost:50051".to_string(),
            connect_timeout_ms: 5_000,
            request_timeout_ms: 10_000,
            connect_attempts: 5,
        }
    }
}

impl UpstreamConfig {
    /// Config pointing at `address` with default timeouts.
    pub fn for_address(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    /// The address as a URI tonic accepts.
    pub fn uri(&self) -> String {
        if self.address.starts_with("http://") || self.address.starts_with("https://") {
            self.address.clone()
        } else {
            format!("http://{}", self.address)
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
