//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Request-level failures. Each one ends only the request that raised it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Wrong HTTP verb for the endpoint
    #[error("Only {allowed} method is allowed")]
    InvalidMethod { allowed: &'static str },

    /// Body could not be decoded into a user payload; carries the decoder text
    #[error("{0}")]
    MalformedBody(String),

    #[error("User not found")]
    UserNotFound,
}

impl ApiError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidMethod { .. } | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::UserNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedBody(err.to_string())
    }
}

/// Plain-text body with the error message
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
