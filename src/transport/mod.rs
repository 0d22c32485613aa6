//! Transport helpers shared by the gRPC and HTTP listeners.
//!
//! TCP only: every listener binds `host:port`, with port 0 selecting an
//! ephemeral port.

use std::future::Future;

use axum::Router;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::CORRELATION_ID_HEADER;

/// TCP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TcpConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
}

impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 50051,
        }
    }
}

impl TcpConfig {
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    /// Get the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Bind `config` and serve an axum router until the server fails.
///
/// The actual bound address is always logged, so an ephemeral port can be
/// discovered.
pub async fn serve_http(
    router: Router,
    config: &TcpConfig,
    service_name: &str,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.addr()).await?;
    serve_http_with_listener(router, listener, service_name, std::future::pending()).await
}

/// Serve an axum router on an already-bound listener until `shutdown` resolves.
pub async fn serve_http_with_listener<F>(
    router: Router,
    listener: TcpListener,
    service_name: &str,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(
        service = %service_name,
        address = %addr,
        transport = "tcp",
        "HTTP server listening"
    );
    axum::serve(listener, router.layer(TraceLayer::new_for_http()))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Tower trace layer that extracts `x-correlation-id` from gRPC request headers.
///
/// Creates a tracing span per request with the correlation_id, enabling
/// all downstream tracing to inherit it automatically. This works at the HTTP
/// layer, before tonic deserializes the protobuf body.
pub fn grpc_trace_layer() -> TraceLayer<
    tower_http::classify::SharedClassifier<tower_http::classify::GrpcErrorsAsFailures>,
    impl Fn(&http::Request<tonic::body::BoxBody>) -> tracing::Span + Clone,
> {
    TraceLayer::new_for_grpc().make_span_with(|request: &http::Request<tonic::body::BoxBody>| {
        let correlation_id = request
            .headers()
            .get(CORRELATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        let path = request.uri().path();
        tracing::info_span!("grpc", %correlation_id, %path)
    })
}
