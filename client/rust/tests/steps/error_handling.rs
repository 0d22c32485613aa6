//! Error handling step definitions.

use cucumber::{given, then, World};
use nexuspoint_client::ClientError;
use tonic::Status;

/// Test context for error handling scenarios.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct ErrorHandlingWorld {
    current_error: Option<ClientError>,
}

impl ErrorHandlingWorld {
    fn new() -> Self {
        Self {
            current_error: None,
        }
    }

    fn error(&self) -> &ClientError {
        self.current_error.as_ref().expect("no error")
    }
}

// --- Given steps ---

#[given("the central service is unreachable")]
async fn given_unreachable(world: &mut ErrorHandlingWorld) {
    world.current_error = Some(ClientError::Connection("connection refused".to_string()));
}

#[given("the central service reports NOT_FOUND")]
async fn given_not_found(world: &mut ErrorHandlingWorld) {
    world.current_error = Some(ClientError::from(Status::not_found("profile not found")));
}

#[given("the central service reports INVALID_ARGUMENT")]
async fn given_invalid_argument(world: &mut ErrorHandlingWorld) {
    world.current_error = Some(ClientError::from(Status::invalid_argument("bad id")));
}

#[given("the central service reports UNAVAILABLE")]
async fn given_unavailable(world: &mut ErrorHandlingWorld) {
    world.current_error = Some(ClientError::from(Status::unavailable("connection reset")));
}

#[given("the central service omits the response payload")]
async fn given_empty_payload(world: &mut ErrorHandlingWorld) {
    world.current_error = Some(ClientError::MissingField("profile"));
}

// --- Then steps ---

#[then("the error should be a connection error")]
async fn then_is_connection_error(world: &mut ErrorHandlingWorld) {
    assert!(world.error().is_connection_error());
}

#[then("the error should not be a connection error")]
async fn then_is_not_connection_error(world: &mut ErrorHandlingWorld) {
    assert!(!world.error().is_connection_error());
}

#[then("the error should be a gRPC error")]
async fn then_is_grpc_error(world: &mut ErrorHandlingWorld) {
    assert!(matches!(world.error(), ClientError::Grpc(_)));
    assert!(world.error().status().is_some());
}

#[then("the error should be a not-found error")]
async fn then_is_not_found(world: &mut ErrorHandlingWorld) {
    assert!(world.error().is_not_found());
}

#[then("the error should not be a not-found error")]
async fn then_is_not_not_found(world: &mut ErrorHandlingWorld) {
    assert!(!world.error().is_not_found());
}

#[then("the error should be an invalid-argument error")]
async fn then_is_invalid_argument(world: &mut ErrorHandlingWorld) {
    assert!(world.error().is_invalid_argument());
}

#[then(expr = "the error message should mention {string}")]
async fn then_message_mentions(world: &mut ErrorHandlingWorld, needle: String) {
    assert!(world.error().message().contains(&needle));
}
