//! `user.v1.UserService` handler.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::debug;

use crate::proto::user_service_server::{UserService, UserServiceServer};
use crate::proto::{self, GetProfileRequest, GetProfileResponse, GetUsersRequest, GetUsersResponse};
use crate::store::{Profile, RecordStore, User};

/// Serves the user directory and profiles from the record store.
#[derive(Debug, Clone)]
pub struct UserHandler {
    store: Arc<RecordStore>,
}

impl UserHandler {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Wrap in the generated tonic server, ready for registration.
    pub fn into_server(self) -> UserServiceServer<Self> {
        UserServiceServer::new(self)
    }
}

#[tonic::async_trait]
impl UserService for UserHandler {
    async fn get_users(
        &self,
        _request: Request<GetUsersRequest>,
    ) -> Result<Response<GetUsersResponse>, Status> {
        let users: Vec<proto::User> = self
            .store
            .list_all::<User>()
            .iter()
            .map(proto::User::from)
            .collect();

        debug!(count = users.len(), "GetUsers");
        Ok(Response::new(GetUsersResponse { users }))
    }

    async fn get_profile(
        &self,
        request: Request<GetProfileRequest>,
    ) -> Result<Response<GetProfileResponse>, Status> {
        let user_id = request.into_inner().user_id;

        let profile = self.store.get_by_id::<Profile>(user_id).map_err(|e| {
            debug!(user_id, error = %e, "GetProfile miss");
            Status::from(e)
        })?;

        Ok(Response::new(GetProfileResponse {
            profile: Some(profile.into()),
        }))
    }
}
