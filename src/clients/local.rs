//! In-process central client.
//!
//! Calls the service handlers directly, so the central process can serve
//! its own JSON routes through the same translator the gateway uses,
//! without a loopback gRPC hop.

use std::sync::Arc;

use async_trait::async_trait;
use nexuspoint_client::{correlated_request, ClientError, ProductClient, Result, UserClient};

use crate::proto::product_service_server::ProductService;
use crate::proto::user_service_server::UserService;
use crate::proto::{
    GetProductRequest, GetProductsRequest, GetProfileRequest, GetUsersRequest, Product, Profile,
    User,
};
use crate::services::{ProductHandler, UserHandler};
use crate::store::RecordStore;

/// Central client backed by handlers in the same process.
#[derive(Debug, Clone)]
pub struct LocalCentral {
    users: UserHandler,
    products: ProductHandler,
}

impl LocalCentral {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            users: UserHandler::new(store.clone()),
            products: ProductHandler::new(store),
        }
    }
}

#[async_trait]
impl UserClient for LocalCentral {
    async fn list_users(&self, correlation_id: &str) -> Result<Vec<User>> {
        let response = self
            .users
            .get_users(correlated_request(GetUsersRequest {}, correlation_id))
            .await?;
        Ok(response.into_inner().users)
    }

    async fn get_profile(&self, user_id: i32, correlation_id: &str) -> Result<Profile> {
        let response = self
            .users
            .get_profile(correlated_request(
                GetProfileRequest { user_id },
                correlation_id,
            ))
            .await?;
        response
            .into_inner()
            .profile
            .ok_or(ClientError::MissingField("profile"))
    }
}

#[async_trait]
impl ProductClient for LocalCentral {
    async fn list_products(&self, correlation_id: &str) -> Result<Vec<Product>> {
        let response = self
            .products
            .get_products(correlated_request(GetProductsRequest {}, correlation_id))
            .await?;
        Ok(response.into_inner().products)
    }

    async fn get_product(&self, product_id: i32, correlation_id: &str) -> Result<Product> {
        let response = self
            .products
            .get_product(correlated_request(
                GetProductRequest { product_id },
                correlation_id,
            ))
            .await?;
        response
            .into_inner()
            .product
            .ok_or(ClientError::MissingField("product"))
    }
}
