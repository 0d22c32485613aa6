//! Correlation id propagation for outgoing central calls.

use tonic::metadata::MetadataValue;

/// Metadata key carrying the correlation id of the originating HTTP request.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Wrap `msg` in a request tagged with `correlation_id`.
///
/// An empty id, or one that is not valid ASCII metadata, leaves the request
/// untagged rather than failing the call.
pub fn correlated_request<T>(msg: T, correlation_id: &str) -> tonic::Request<T> {
    let mut request = tonic::Request::new(msg);
    if correlation_id.is_empty() {
        return request;
    }
    match MetadataValue::try_from(correlation_id) {
        Ok(value) => {
            request.metadata_mut().insert(CORRELATION_ID_HEADER, value);
        }
        Err(_) => tracing::debug!("dropping correlation id that is not valid metadata"),
    }
    request
}
