//! HTTP responses shared by commands.

use crate::format::ResponseFormat;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Plain-text body for failed chat-markup requests.
pub const NOT_FOUND_TEXT: &str = "Not Found";

/// JSON body for failed structured requests.
#[derive(Debug, Serialize)]
pub struct FailureBody {
    #[serde(rename = "Response")]
    pub response: String,
}

/// 200 with an already-serialized JSON payload.
pub fn structured_ok(body: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        body,
    )
        .into_response()
}

/// 200 with chat-markup text.
pub fn markup_ok(text: String) -> Response {
    (StatusCode::OK, text).into_response()
}

/// A failure answered in the requested format: JSON requests get `message`
/// in a [`FailureBody`], markup requests get `markup_text` verbatim.
pub fn failure(
    format: ResponseFormat,
    status: StatusCode,
    message: impl Into<String>,
    markup_text: impl Into<String>,
) -> Response {
    match format {
        ResponseFormat::Json => {
            let body = FailureBody {
                response: message.into(),
            };
            (status, Json(body)).into_response()
        }
        ResponseFormat::Slack => (status, markup_text.into()).into_response(),
    }
}
