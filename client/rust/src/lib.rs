//! Rust client for the nexuspoint central gRPC service.
//!
//! This crate owns the protobuf schema bindings shared by the central
//! server and every gateway, plus a typed client that keeps a single
//! long-lived channel to the central endpoint.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use nexuspoint_client::{CentralClient, UpstreamConfig};
//!
//! async fn example() -> nexuspoint_client::Result<()> {
//!     let client = CentralClient::connect(&UpstreamConfig::default()).await?;
//!
//!     let users = client.list_users("req-1").await?;
//!     let profile = client.get_profile(users[0].id, "req-1").await?;
//!     Ok(())
//! }
//! ```
//!
//! # Mocking for Tests
//!
//! Implement the `UserClient` and `ProductClient` traits to create mock clients:
//!
//! ```rust,ignore
//! use nexuspoint_client::traits::UserClient;
//! use nexuspoint_client::proto::{Profile, User};
//! use async_trait::async_trait;
//!
//! struct NoUsers;
//!
//! #[async_trait]
//! impl UserClient for NoUsers {
//!     async fn list_users(&self, _correlation_id: &str) -> nexuspoint_client::Result<Vec<User>> {
//!         Ok(vec![])
//!     }
//!
//!     async fn get_profile(&self, _user_id: i32, _correlation_id: &str)
//!         -> nexuspoint_client::Result<Profile>
//!     {
//!         Err(tonic::Status::not_found("no profiles").into())
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod grpc;
pub mod proto;
pub mod traits;

// Re-export main types at crate root
pub use client::CentralClient;
pub use config::UpstreamConfig;
pub use error::{ClientError, Result};
pub use grpc::{correlated_request, CORRELATION_ID_HEADER};
pub use traits::{ProductClient, UserClient};
