//! API request and response types.

use serde::{Deserialize, Serialize};

/// Form body posted by the chat platform.
///
/// Only `text` is read; the platform sends many more fields.
#[derive(Debug, Default, Deserialize)]
pub struct CommandForm {
    #[serde(default)]
    pub text: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
