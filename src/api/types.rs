use serde::{Deserialize, Serialize};

/// Body of `POST /add-user`.
///
/// `id` is accepted so that a full user object can be posted, but it must be
/// an integer when present and is always discarded.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

/// Response of `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of stored users
    pub users: usize,
}
