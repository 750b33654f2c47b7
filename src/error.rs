//! Error types for the user service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Store Error Enum ==
/// Failure reported by a key-value store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Redis command or connection failure
    #[error("redis: {0}")]
    Redis(#[from] redis::RedisError),
}

// == API Error Enum ==
/// Unified error type for the HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body could not be read as a user record
    #[error("{0}")]
    InvalidBody(String),

    /// No record stored under the requested id
    #[error("User {0} Not found")]
    NotFound(String),

    /// The store call itself failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A stored value is not a valid user record
    #[error("Stored record {0} is not a valid user")]
    CorruptRecord(String),

    /// A record could not be serialized for storage
    #[error("Error marshalling user: {0}")]
    Encode(#[from] serde_json::Error),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, body) = match &self {
            ApiError::InvalidBody(_) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, json!({ "message": message })),
            ApiError::Store(_) | ApiError::CorruptRecord(_) | ApiError::Encode(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": message }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
