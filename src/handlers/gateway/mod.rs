//! HTTP-to-RPC translator.
//!
//! Axum routes that validate query input, call the central services through
//! the client traits and render the records as JSON. Endpoints:
//! - `GET /get-users` and `GET /users`: every user
//! - `GET /profile?user_id=N`: one profile
//! - `GET /products`: the catalog
//! - `GET /product?product_id=N`: one product
//! - `GET /health`: liveness
//!
//! Any other method on these paths, HEAD included, answers 405.

mod dto;
mod errmsg;
mod error;
mod products;
mod users;


pub use dto::{ProductBody, ProfileBody, UserBody};
pub use error::GatewayError;

use std::sync::Arc;

use axum::handler::Handler;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{on, MethodFilter, MethodRouter};
use axum::Router;
use nexuspoint_client::{ProductClient, UserClient, CORRELATION_ID_HEADER};

/// Shared state for axum handlers.
#[derive(Clone)]
pub struct GatewayState {
    users: Arc<dyn UserClient>,
    products: Arc<dyn ProductClient>,
}

impl GatewayState {
    pub fn new(users: Arc<dyn UserClient>, products: Arc<dyn ProductClient>) -> Self {
        Self { users, products }
    }

    /// State backed by one client serving both contracts.
    pub fn from_client<C>(client: C) -> Self
    where
        C: UserClient + ProductClient + 'static,
    {
        let shared = Arc::new(client);
        Self {
            users: shared.clone(),
            products: shared,
        }
    }
}

/// Build the axum router (separated for testing).
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/get-users", get_only(users::list_users))
        .route("/users", get_only(users::list_users))
        .route("/profile", get_only(users::get_profile))
        .route("/products", get_only(products::list_products))
        .route("/product", get_only(products::get_product))
        .route("/health", get_only(health))
        .with_state(state)
}

/// GET and nothing else. HEAD is not implied.
fn get_only<H, T>(handler: H) -> MethodRouter<GatewayState>
where
    H: Handler<T, GatewayState>,
    T: 'static,
{
    on(MethodFilter::GET, handler).fallback(method_not_allowed)
}

async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, errmsg::METHOD_NOT_ALLOWED)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Correlation id from the request, or a fresh UUID v4.
fn correlation_id(headers: &HeaderMap) -> String {
    headers
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}
