//! Retry utilities: backoff builders and retryable error classification.
//!
//! Uses `backon` for exponential backoff with jitter.

use std::time::Duration;

use backon::ExponentialBuilder;
use nexuspoint_client::ClientError;

/// Backoff for gRPC connection retries at startup.
///
/// `attempts` counts the first try, so the builder allows `attempts - 1`
/// retries. Zero behaves like one.
///
/// - Min delay: 100ms
/// - Max delay: 5s
/// - Jitter enabled
pub fn connection_backoff(attempts: usize) -> ExponentialBuilder {
    ExponentialBuilder::default()
        .with_min_delay(Duration::from_millis(100))
        .with_max_delay(Duration::from_secs(5))
        .with_max_times(attempts.saturating_sub(1))
        .with_jitter()
}

/// Whether a failed connect is worth retrying.
///
/// A malformed address never becomes valid, so only transport-level
/// failures retry.
pub fn is_retryable_connect(err: &ClientError) -> bool {
    matches!(err, ClientError::Transport(_))
        || matches!(err.code(), Some(tonic::Code::Unavailable))
}
