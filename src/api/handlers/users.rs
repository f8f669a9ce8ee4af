//! User registry handlers

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::errors::ApiError;
use crate::api::server::RegistryServer;
use crate::api::types::CreateUserRequest;
use crate::core::User;

/// `POST /add-user`
///
/// The body is decoded by hand so any content type is accepted and decode
/// failures surface the decoder's own message. A client-supplied `id` is
/// dropped; the store assigns the next one.
pub async fn add_user(
    State(state): State<Arc<RegistryServer>>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let payload: CreateUserRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejected add-user body: {}", e);
        ApiError::from(e)
    })?;

    let user = state.store.create(payload.name).await;
    info!("User created: id={}", user.id);

    Ok((StatusCode::CREATED, Json(user)))
}

/// `GET /get-user?id=<id>`
///
/// The id is matched as a string against each record's decimal id. A missing
/// parameter behaves like an empty one and never matches.
pub async fn get_user(
    State(state): State<Arc<RegistryServer>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<User>, ApiError> {
    let id = first_param(&params, "id").unwrap_or_default();

    match state.store.find_by_id_str(id).await {
        Some(user) => Ok(Json(user)),
        None => {
            debug!("User not found: id={:?}", id);
            Err(ApiError::UserNotFound)
        }
    }
}

/// `GET /get-all-users`
pub async fn get_all_users(State(state): State<Arc<RegistryServer>>) -> Json<Vec<User>> {
    Json(state.store.list_all().await)
}

/// Method fallback for POST-only routes
pub async fn only_post() -> ApiError {
    debug!("Rejected non-POST request");
    ApiError::InvalidMethod { allowed: "POST" }
}

/// Method fallback for GET-only routes
pub async fn only_get() -> ApiError {
    debug!("Rejected non-GET request");
    ApiError::InvalidMethod { allowed: "GET" }
}

/// First value for `key`, matching how repeated query keys are usually read
fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
