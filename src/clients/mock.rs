//! Mock central client for testing.

use async_trait::async_trait;
use nexuspoint_client::{ClientError, ProductClient, Result, UserClient};
use tokio::sync::RwLock;
use tonic::Status;

use crate::proto::{Product, Profile, User};

/// Mock central client for testing.
///
/// Serves whatever records it is given. Failure injection replaces every
/// answer with the configured error; the last correlation id seen is kept
/// for assertions.
#[derive(Default)]
pub struct MockCentral {
    users: Vec<User>,
    profiles: Vec<Profile>,
    products: Vec<Product>,
    fail_with: RwLock<Option<Status>>,
    fail_connection: RwLock<bool>,
    last_correlation_id: RwLock<Option<String>>,
}

impl MockCentral {
    pub fn new(users: Vec<User>, profiles: Vec<Profile>, products: Vec<Product>) -> Self {
        Self {
            users,
            profiles,
            products,
            ..Self::default()
        }
    }

    /// Answer every call with `status`.
    pub async fn set_fail_with(&self, status: Status) {
        *self.fail_with.write().await = Some(status);
    }

    /// Answer every call as if the upstream were unreachable.
    pub async fn set_fail_connection(&self, fail: bool) {
        *self.fail_connection.write().await = fail;
    }

    pub async fn last_correlation_id(&self) -> Option<String> {
        self.last_correlation_id.read().await.clone()
    }

    async fn check(&self, correlation_id: &str) -> Result<()> {
        *self.last_correlation_id.write().await = Some(correlation_id.to_string());

        if *self.fail_connection.read().await {
            return Err(ClientError::Connection(
                "Mock connection failure".to_string(),
            ));
        }
        if let Some(status) = self.fail_with.read().await.as_ref() {
            return Err(ClientError::from(status.clone()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserClient for MockCentral {
    async fn list_users(&self, correlation_id: &str) -> Result<Vec<User>> {
        self.check(correlation_id).await?;
        Ok(self.users.clone())
    }

    async fn get_profile(&self, user_id: i32, correlation_id: &str) -> Result<Profile> {
        self.check(correlation_id).await?;
        self.profiles
            .iter()
            .find(|p| p.id == user_id)
            .cloned()
            .ok_or_else(|| Status::not_found(format!("profile {} not found", user_id)).into())
    }
}

#[async_trait]
impl ProductClient for MockCentral {
    async fn list_products(&self, correlation_id: &str) -> Result<Vec<Product>> {
        self.check(correlation_id).await?;
        Ok(self.products.clone())
    }

    async fn get_product(&self, product_id: i32, correlation_id: &str) -> Result<Product> {
        self.check(correlation_id).await?;
        self.products
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
            .ok_or_else(|| Status::not_found(format!("product {} not found", product_id)).into())
    }
}
