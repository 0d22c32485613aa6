//! JSON relay.
//!
//! Plain HTTP-to-HTTP proxy: `GET /users` fetches `/get-users` from the
//! central HTTP surface, decodes the user list and serves it again.

use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{on, MethodFilter};
use axum::{Json, Router};
use nexuspoint_client::CORRELATION_ID_HEADER;
use reqwest::Client;
use tracing::{debug, error};

use super::gateway::UserBody;
use crate::config::RelayConfig;

/// Relay failures. All of them render as a bare 500.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned {0}")]
    UpstreamStatus(reqwest::StatusCode),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

/// Shared state for the relay handlers.
#[derive(Debug, Clone)]
pub struct Relay {
    client: Client,
    users_url: String,
}

impl Relay {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(RelayError::Client)?;

        Ok(Self {
            client,
            users_url: format!("{}/get-users", config.upstream_url.trim_end_matches('/')),
        })
    }

    async fn fetch_users(&self, correlation_id: Option<&str>) -> Result<Vec<UserBody>, RelayError> {
        let mut request = self.client.get(&self.users_url);
        if let Some(id) = correlation_id {
            request = request.header(CORRELATION_ID_HEADER, id);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::UpstreamStatus(status));
        }

        let users: Vec<UserBody> = response.json().await?;
        debug!(count = users.len(), "relayed users");
        Ok(users)
    }
}

/// Build the axum router (separated for testing).
pub fn router(relay: Relay) -> Router {
    Router::new()
        .route(
            "/users",
            on(MethodFilter::GET, list_users).fallback(|| async {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
            }),
        )
        .with_state(relay)
}

async fn list_users(
    State(relay): State<Relay>,
    headers: HeaderMap,
) -> Result<Json<Vec<UserBody>>, RelayError> {
    let correlation_id = headers
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok());

    relay
        .fetch_users(correlation_id)
        .await
        .map(Json)
        .map_err(|e| {
            error!(upstream = %relay.users_url, error = %e, "relay fetch failed");
            e
        })
}
