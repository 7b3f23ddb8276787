//! HTTP request handlers.

use super::types::{CommandForm, HealthResponse};
use super::AppState;
use crate::commands::Command;
use crate::error::ServerError;
use crate::format::ResponseFormat;
use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use tracing::{debug, info};

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// `301 Moved Permanently` to the project homepage.
pub async fn homepage(State(state): State<AppState>) -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, state.homepage_url.as_ref())],
    )
        .into_response()
}

/// Split `recharge.json` into a command and a format.
///
/// Resolved before the form is used, so an unsupported format is refused
/// whatever the body holds.
pub fn resolve_invocation(invocation: &str) -> Result<(Command, ResponseFormat), ServerError> {
    let (name, format) = invocation
        .rsplit_once('.')
        .ok_or_else(|| ServerError::UnknownCommand(invocation.to_string()))?;

    let command = name.parse::<Command>()?;
    let format = format.parse::<ResponseFormat>()?;
    Ok((command, format))
}

/// Run a chat command: `POST /<command>.<format>` with a `text` form field.
pub async fn run_command(
    State(state): State<AppState>,
    Path(invocation): Path<String>,
    form: Result<Form<CommandForm>, FormRejection>,
) -> Result<Response, ServerError> {
    let (command, format) = resolve_invocation(&invocation)?;

    let CommandForm { text } = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable command form, treating text as empty");
            CommandForm::default()
        }
    };

    info!(%command, %format, "Running command");
    Ok(command.run(state.plans.as_ref(), format, &text).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_invocation() {
        let (command, format) = resolve_invocation("recharge.slack").unwrap();
        assert_eq!(command, Command::Recharge);
        assert_eq!(format, ResponseFormat::Slack);
    }

    #[test]
    fn test_resolve_unknown_command() {
        assert!(matches!(
            resolve_invocation("excuse.json"),
            Err(ServerError::UnknownCommand(_))
        ));
        assert!(matches!(
            resolve_invocation("recharge"),
            Err(ServerError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_resolve_unsupported_format() {
        assert!(matches!(
            resolve_invocation("recharge.xml"),
            Err(ServerError::UnsupportedFormat(f)) if f == "xml"
        ));
    }
}
