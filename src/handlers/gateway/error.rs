//! Translator error type and its HTTP rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nexuspoint_client::ClientError;
use tracing::{debug, error};

use super::errmsg;

/// Everything a translator route can fail with.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("{0} is required")]
    MissingParameter(&'static str),

    #[error("invalid {0}")]
    InvalidParameter(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("upstream call failed: {0}")]
    Upstream(#[source] ClientError),
}

impl GatewayError {
    /// Classify a failed RPC for `resource`.
    ///
    /// Anything other than NOT_FOUND or INVALID_ARGUMENT is logged here with
    /// its full detail; the response only carries the sanitized message.
    pub fn from_client(err: ClientError, resource: &'static str, correlation_id: &str) -> Self {
        if err.is_not_found() {
            debug!(%correlation_id, resource, "upstream reported not found");
            return GatewayError::NotFound(resource);
        }
        if err.is_invalid_argument() {
            debug!(%correlation_id, resource, error = %err, "upstream rejected arguments");
            return GatewayError::InvalidArgument(err.message());
        }
        error!(%correlation_id, resource, error = %err, "upstream call failed");
        GatewayError::Upstream(err)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MissingParameter(_)
            | GatewayError::InvalidParameter(_)
            | GatewayError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = match &self {
            GatewayError::InvalidArgument(_) => errmsg::INVALID_ARGUMENT.to_string(),
            GatewayError::Upstream(_) => errmsg::INTERNAL_ERROR.to_string(),
            other => other.to_string(),
        };
        (self.status_code(), body).into_response()
    }
}

/// First value of query parameter `name`, parsed as a required id.
///
/// Later repeats of the same key are ignored.
pub(super) fn query_id(
    query: &[(String, String)],
    name: &'static str,
) -> Result<i32, GatewayError> {
    let value = query
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str());
    parse_id(value, name)
}

/// Parse a required integer query parameter.
///
/// Missing and empty are the same; anything that is not an `i32` is invalid.
pub(super) fn parse_id(value: Option<&str>, name: &'static str) -> Result<i32, GatewayError> {
    match value {
        None | Some("") => Err(GatewayError::MissingParameter(name)),
        Some(raw) => raw
            .parse()
            .map_err(|_| GatewayError::InvalidParameter(name)),
    }
}
