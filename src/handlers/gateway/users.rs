//! `/get-users`, `/users` and `/profile`.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use tracing::debug;

use super::dto::{ProfileBody, UserBody};
use super::error::{query_id, GatewayError};
use super::{correlation_id, GatewayState};

pub(super) async fn list_users(
    State(state): State<GatewayState>,
    headers: HeaderMap,
) -> Result<Json<Vec<UserBody>>, GatewayError> {
    let correlation_id = correlation_id(&headers);

    let users = state
        .users
        .list_users(&correlation_id)
        .await
        .map_err(|e| GatewayError::from_client(e, "users", &correlation_id))?;

    debug!(%correlation_id, count = users.len(), "listed users");
    Ok(Json(users.into_iter().map(UserBody::from).collect()))
}

pub(super) async fn get_profile(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<ProfileBody>, GatewayError> {
    let user_id = query_id(&query, "user_id")?;
    let correlation_id = correlation_id(&headers);

    let profile = state
        .users
        .get_profile(user_id, &correlation_id)
        .await
        .map_err(|e| GatewayError::from_client(e, "profile", &correlation_id))?;

    Ok(Json(profile.into()))
}
