//! Nexuspoint - gRPC central service with HTTP/JSON gateways.
//!
//! The central process hosts the user and product services on one gRPC
//! listener. Gateways accept plain HTTP, translate each request into an
//! RPC call over a shared channel and answer with JSON.

pub mod clients;
pub mod config;
pub mod handlers;
pub mod registry;
pub mod services;
pub mod store;
pub mod transport;
pub mod utils;

pub use nexuspoint_client::proto;
pub use nexuspoint_client::{correlated_request, CORRELATION_ID_HEADER};
