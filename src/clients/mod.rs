//! Implementations of the central client traits that do not use the network.

pub mod local;
pub mod mock;

pub use local::LocalCentral;
pub use mock::MockCentral;
