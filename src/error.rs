//! Error types for identity lookups
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Lookup Error Enum ==
/// Unified error type for identity lookups.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The service answered well-formed but knows no such player
    #[error("player not found")]
    PlayerNotFound,

    /// Network or HTTP layer failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body did not match the expected JSON shape
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LookupError {
    /// Returns true for the "unknown player" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::PlayerNotFound)
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let status = match &self {
            LookupError::PlayerNotFound => StatusCode::NOT_FOUND,
            LookupError::Transport(_) | LookupError::Decode(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for identity lookups.
pub type Result<T> = std::result::Result<T, LookupError>;
