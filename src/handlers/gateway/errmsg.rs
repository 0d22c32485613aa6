//! Error message constants for gateway handlers.
//!
//! User-facing error messages should be sanitized to avoid leaking infrastructure details.
//! Full error details are logged internally at ERROR level.

/// Any non-GET request on a declared path.
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// Upstream or transport failure (sanitized - no address or status details).
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Upstream rejected the request arguments.
pub const INVALID_ARGUMENT: &str = "Invalid argument";
