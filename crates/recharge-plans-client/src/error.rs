//! Recharge plans client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlansError {
    /// Transport failure. Built with the request URL stripped, since the
    /// URL carries the API key.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered with a non-success status code. Displays as the
    /// upstream status text so it can be handed straight to the caller.
    #[error("{message}")]
    Upstream { status: i64, message: String },
}
