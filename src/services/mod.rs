//! gRPC service implementations backed by the record store.

pub mod product;
pub mod user;

pub use product::ProductHandler;
pub use user::UserHandler;

use tonic::Status;

use crate::proto;
use crate::store::{self, StoreError};

impl From<StoreError> for Status {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => Status::not_found(err.to_string()),
            StoreError::DuplicateId { .. } => Status::internal(err.to_string()),
        }
    }
}

impl From<&store::User> for proto::User {
    fn from(user: &store::User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            location: user.location.clone(),
        }
    }
}

impl From<&store::Profile> for proto::Profile {
    fn from(profile: &store::Profile) -> Self {
        Self {
            id: profile.id,
            bio: profile.bio.clone(),
            website: profile.website.clone(),
            company: profile.company.clone(),
            role: profile.role.clone(),
        }
    }
}

impl From<&store::Product> for proto::Product {
    fn from(product: &store::Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            stock: product.stock,
        }
    }
}
