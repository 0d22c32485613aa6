//! Shared test fixtures and helpers for central integration tests.

pub use std::net::SocketAddr;
pub use std::sync::Arc;

pub use axum::body::Body;
pub use axum::http::{Method, Request, StatusCode};
pub use axum::Router;
pub use tower::ServiceExt;

pub use nexuspoint::clients::LocalCentral;
pub use nexuspoint::handlers::gateway::{router, GatewayState};
pub use nexuspoint::registry::{RegistryError, ServiceRegistry};
pub use nexuspoint::services::{ProductHandler, UserHandler};
pub use nexuspoint::store::RecordStore;
pub use nexuspoint_client::{CentralClient, UpstreamConfig};

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A running central gRPC server on 127.0.0.1.
pub struct Central {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<Result<(), RegistryError>>>,
}

impl Central {
    /// Start the user and product services over the seeded store.
    pub async fn start() -> Self {
        let store = Arc::new(RecordStore::seeded());
        let mut registry = ServiceRegistry::new();
        registry
            .register(UserHandler::new(store.clone()).into_server())
            .unwrap()
            .register(ProductHandler::new(store).into_server())
            .unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            registry
                .serve_with_listener(listener, async {
                    rx.await.ok();
                })
                .await
        });

        Self {
            addr,
            shutdown: Some(tx),
            handle: Some(handle),
        }
    }

    pub fn upstream(&self) -> UpstreamConfig {
        UpstreamConfig::for_address(self.addr.to_string())
    }

    pub async fn client(&self) -> CentralClient {
        CentralClient::connect(&self.upstream()).await.unwrap()
    }

    /// Signal shutdown and wait for the server task to finish.
    pub async fn stop(mut self) -> Result<(), RegistryError> {
        if let Some(tx) = self.shutdown.take() {
            tx.send(()).ok();
        }
        match self.handle.take() {
            Some(handle) => handle.await.unwrap(),
            None => Ok(()),
        }
    }
}

impl Drop for Central {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Translator router over a network client.
pub fn gateway(client: CentralClient) -> Router {
    router(GatewayState::from_client(client))
}

/// Translator router over the in-process handlers.
pub fn local_gateway() -> Router {
    router(GatewayState::from_client(LocalCentral::new(Arc::new(
        RecordStore::seeded(),
    ))))
}

pub async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

pub async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
    send(app, Method::GET, uri).await
}

pub fn json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap()
}
