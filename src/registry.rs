//! RPC service registry.
//!
//! Owns the single tonic server for the central process. Handlers register
//! by their fully-qualified service name before serving starts; tonic routes
//! each call by `/{package.Service}/{Method}`, so any number of services
//! share one listener without conflict.

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::body::BoxBody;
use tonic::server::NamedService;
use tonic::service::RoutesBuilder;
use tonic::transport::Server;
use tonic_health::ServingStatus;
use tower::Service;
use tracing::info;

use crate::transport::{grpc_trace_layer, TcpConfig};

/// Errors from registering or serving.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("service already registered: {0}")]
    DuplicateService(&'static str),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid listen address {0}")]
    InvalidAddress(String),

    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}

/// Registration table for the services hosted on one listener.
///
/// Bindings are fixed once `serve` is called; there is no runtime
/// registration or removal.
#[derive(Default)]
pub struct ServiceRegistry {
    routes: RoutesBuilder,
    names: Vec<&'static str>,
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a generated tonic server under its service name.
    ///
    /// Fails if a service with the same name is already registered.
    pub fn register<S>(&mut self, service: S) -> Result<&mut Self, RegistryError>
    where
        S: Service<
                http::Request<BoxBody>,
                Response = http::Response<BoxBody>,
                Error = Infallible,
            > + NamedService
            + Clone
            + Send
            + 'static,
        S::Future: Send + 'static,
    {
        if self.names.contains(&S::NAME) {
            return Err(RegistryError::DuplicateService(S::NAME));
        }

        info!(service = S::NAME, "Registered gRPC service");
        self.routes.add_service(service);
        self.names.push(S::NAME);
        Ok(self)
    }

    /// Registered service names, in registration order.
    pub fn service_names(&self) -> &[&'static str] {
        &self.names
    }

    /// Bind the configured address and serve until the server fails.
    pub async fn serve(self, config: &TcpConfig) -> Result<(), RegistryError> {
        let addr: SocketAddr = config
            .addr()
            .parse()
            .map_err(|_| RegistryError::InvalidAddress(config.addr()))?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| RegistryError::Bind {
                addr: addr.to_string(),
                source,
            })?;

        self.serve_with_listener(listener, std::future::pending())
            .await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    ///
    /// Also exposes `grpc.health.v1.Health`, reporting SERVING for every
    /// registered service.
    pub async fn serve_with_listener<F>(
        mut self,
        listener: TcpListener,
        shutdown: F,
    ) -> Result<(), RegistryError>
    where
        F: Future<Output = ()> + Send,
    {
        let (mut health_reporter, health_service) = tonic_health::server::health_reporter();
        health_reporter
            .set_service_status("", ServingStatus::Serving)
            .await;
        for name in &self.names {
            health_reporter
                .set_service_status(*name, ServingStatus::Serving)
                .await;
        }
        self.routes.add_service(health_service);

        let bound_addr = listener.local_addr().ok();
        info!(
            address = ?bound_addr,
            services = ?self.names,
            transport = "tcp",
            "gRPC server listening"
        );

        Server::builder()
            .layer(grpc_trace_layer())
            .add_routes(self.routes.routes())
            .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
            .await?;

        info!("gRPC server stopped");
        Ok(())
    }
}
