//! Client traits for the central service contracts.
//!
//! The HTTP gateway talks to these traits rather than to a concrete tonic
//! client, so the same translator runs over the network client, an
//! in-process adapter, or a test mock.

use async_trait::async_trait;

use crate::error::Result;
use crate::proto::{Product, Profile, User};

/// Client side of `user.v1.UserService`.
#[async_trait]
pub trait UserClient: Send + Sync {
    /// Fetch every user, in directory order.
    async fn list_users(&self, correlation_id: &str) -> Result<Vec<User>>;

    /// Fetch the profile owned by `user_id`.
    async fn get_profile(&self, user_id: i32, correlation_id: &str) -> Result<Profile>;
}

/// Client side of `product.v1.ProductService`.
#[async_trait]
pub trait ProductClient: Send + Sync {
    /// Fetch the whole catalog, in catalog order.
    async fn list_products(&self, correlation_id: &str) -> Result<Vec<Product>>;

    /// Fetch one product by id.
    async fn get_product(&self, product_id: i32, correlation_id: &str) -> Result<Product>;
}
