//! Step definition modules for Cucumber feature tests.

pub mod central_client;
pub mod error_handling;
