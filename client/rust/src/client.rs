//! Shared client for the central service, wrapping tonic gRPC stubs.

use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};

use crate::config::UpstreamConfig;
use crate::error::{ClientError, Result};
use crate::grpc::correlated_request;
use crate::proto::{
    product_service_client::ProductServiceClient as TonicProductClient,
    user_service_client::UserServiceClient as TonicUserClient, GetProductRequest,
    GetProductsRequest, GetProfileRequest, GetUsersRequest, Product, Profile, User,
};
use crate::traits;

/// Open a channel to the central endpoint.
///
/// The channel carries the connect timeout and a per-call timeout.
pub async fn create_channel(config: &UpstreamConfig) -> Result<Channel> {
    let channel = Endpoint::from_shared(config.uri())
        .map_err(|e| ClientError::Connection(e.to_string()))?
        .connect_timeout(config.connect_timeout())
        .timeout(config.request_timeout())
        .connect()
        .await?;
    Ok(channel)
}

/// Client for every service the central process hosts.
///
/// Both service stubs ride on one underlying channel. Cloning is cheap and
/// never opens a new connection, so a single instance is built at startup
/// and shared across all requests.
#[derive(Debug, Clone)]
pub struct CentralClient {
    users: TonicUserClient<Channel>,
    products: TonicProductClient<Channel>,
}

impl CentralClient {
    /// Connect to the central service described by `config`.
    ///
    /// One attempt; callers wanting retries wrap this in a backoff policy.
    pub async fn connect(config: &UpstreamConfig) -> Result<Self> {
        info!(address = %config.address, transport = "tcp", "Connecting to central service");
        let channel = create_channel(config).await?;
        Ok(Self::from_channel(channel))
    }

    /// Create a client from an existing channel.
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            users: TonicUserClient::new(channel.clone()),
            products: TonicProductClient::new(channel),
        }
    }

    /// Fetch every user.
    pub async fn list_users(&self, correlation_id: &str) -> Result<Vec<User>> {
        debug!(correlation_id = %correlation_id, "GetUsers");
        let response = self
            .users
            .clone()
            .get_users(correlated_request(GetUsersRequest {}, correlation_id))
            .await?;
        Ok(response.into_inner().users)
    }

    /// Fetch the profile for one user.
    pub async fn get_profile(&self, user_id: i32, correlation_id: &str) -> Result<Profile> {
        debug!(correlation_id = %correlation_id, user_id, "GetProfile");
        let response = self
            .users
            .clone()
            .get_profile(correlated_request(GetProfileRequest { user_id }, correlation_id))
            .await?;
        response
            .into_inner()
            .profile
            .ok_or(ClientError::MissingField("profile"))
    }

    /// Fetch the full catalog.
    pub async fn list_products(&self, correlation_id: &str) -> Result<Vec<Product>> {
        debug!(correlation_id = %correlation_id, "GetProducts");
        let response = self
            .products
            .clone()
            .get_products(correlated_request(GetProductsRequest {}, correlation_id))
            .await?;
        Ok(response.into_inner().products)
    }

    /// Fetch one product.
    pub async fn get_product(&self, product_id: i32, correlation_id: &str) -> Result<Product> {
        debug!(correlation_id = %correlation_id, product_id, "GetProduct");
        let response = self
            .products
            .clone()
            .get_product(correlated_request(GetProductRequest { product_id }, correlation_id))
            .await?;
        response
            .into_inner()
            .product
            .ok_or(ClientError::MissingField("product"))
    }
}

#[async_trait]
impl traits::UserClient for CentralClient {
    async fn list_users(&self, correlation_id: &str) -> Result<Vec<User>> {
        self.list_users(correlation_id).await
    }

    async fn get_profile(&self, user_id: i32, correlation_id: &str) -> Result<Profile> {
        self.get_profile(user_id, correlation_id).await
    }
}

#[async_trait]
impl traits::ProductClient for CentralClient {
    async fn list_products(&self, correlation_id: &str) -> Result<Vec<Product>> {
        self.list_products(correlation_id).await
    }

    async fn get_product(&self, product_id: i32, correlation_id: &str) -> Result<Product> {
        self.get_product(product_id, correlation_id).await
    }
}
