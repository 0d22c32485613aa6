//! `/products` and `/product`.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;

use super::dto::ProductBody;
use super::error::{query_id, GatewayError};
use super::{correlation_id, GatewayState};

pub(super) async fn list_products(
    State(state): State<GatewayState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ProductBody>>, GatewayError> {
    let correlation_id = correlation_id(&headers);

    let products = state
        .products
        .list_products(&correlation_id)
        .await
        .map_err(|e| GatewayError::from_client(e, "products", &correlation_id))?;

    Ok(Json(products.into_iter().map(ProductBody::from).collect()))
}

pub(super) async fn get_product(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<ProductBody>, GatewayError> {
    let product_id = query_id(&query, "product_id")?;
    let correlation_id = correlation_id(&headers);

    let product = state
        .products
        .get_product(product_id, &correlation_id)
        .await
        .map_err(|e| GatewayError::from_client(e, "product", &correlation_id))?;

    Ok(Json(product.into()))
}
