//! Error types for the command server.

use crate::format::UnsupportedFormat;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors raised before a command gets to run.
///
/// Failures inside a command are answered in the requested format by the
/// command itself; these are the ones that don't depend on it.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Unsupported response format: {0}")]
    UnsupportedFormat(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            ServerError::UnknownCommand(_) => {
                let body = ErrorResponse {
                    error: self.to_string(),
                    code: "UNKNOWN_COMMAND".to_string(),
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            // Unsupported formats get no body at all.
            ServerError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response(),
        }
    }
}

impl From<UnsupportedFormat> for ServerError {
    fn from(e: UnsupportedFormat) -> Self {
        ServerError::UnsupportedFormat(e.0)
    }
}
