//! Generated protobuf types and gRPC stubs.

pub mod user {
    pub mod v1 {
        tonic::include_proto!("user.v1");
    }
}

pub mod product {
    pub mod v1 {
        tonic::include_proto!("product.v1");
    }
}

pub use product::v1::{
    product_service_client, product_service_server, GetProductRequest, GetProductResponse,
    GetProductsRequest, GetProductsResponse, Product,
};
pub use user::v1::{
    user_service_client, user_service_server, GetProfileRequest, GetProfileResponse,
    GetUsersRequest, GetUsersResponse, Profile, User,
};
