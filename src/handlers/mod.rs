//! HTTP surfaces: the RPC translator and the JSON relay.

pub mod gateway;
pub mod relay;
