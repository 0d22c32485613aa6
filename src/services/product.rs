//! `product.v1.ProductService` handler.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::debug;

use crate::proto::product_service_server::{ProductService, ProductServiceServer};
use crate::proto::{
    self, GetProductRequest, GetProductResponse, GetProductsRequest, GetProductsResponse,
};
use crate::store::{Product, RecordStore};

/// Serves the product catalog from the record store.
#[derive(Debug, Clone)]
pub struct ProductHandler {
    store: Arc<RecordStore>,
}

impl ProductHandler {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Wrap in the generated tonic server, ready for registration.
    pub fn into_server(self) -> ProductServiceServer<Self> {
        ProductServiceServer::new(self)
    }
}

#[tonic::async_trait]
impl ProductService for ProductHandler {
    async fn get_products(
        &self,
        _request: Request<GetProductsRequest>,
    ) -> Result<Response<GetProductsResponse>, Status> {
        let products: Vec<proto::Product> = self
            .store
            .list_all::<Product>()
            .iter()
            .map(proto::Product::from)
            .collect();

        debug!(count = products.len(), "GetProducts");
        Ok(Response::new(GetProductsResponse { products }))
    }

    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<GetProductResponse>, Status> {
        let product_id = request.into_inner().product_id;

        let product = self.store.get_by_id::<Product>(product_id).map_err(|e| {
            debug!(product_id, error = %e, "GetProduct miss");
            Status::from(e)
        })?;

        Ok(Response::new(GetProductResponse {
            product: Some(product.into()),
        }))
    }
}
