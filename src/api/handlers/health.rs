//! Health check handler

use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::api::server::RegistryServer;
use crate::api::types::HealthResponse;

/// Liveness probe with the current user count
pub async fn health_check(State(state): State<Arc<RegistryServer>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        users: state.store.len().await,
    })
}
