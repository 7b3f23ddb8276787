//! Recharge plans HTTP client.

use crate::error::PlansError;
use crate::types::{Plan, PlansEnvelope};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Client for the telecom recharge plans API.
///
/// The API key is stored using `SecretString` so it never ends up in logs or
/// debug output.
#[derive(Clone)]
pub struct RechargePlansClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl RechargePlansClient {
    /// Create a new client.
    ///
    /// `timeout` bounds each lookup; an elapsed timeout surfaces as
    /// [`PlansError::Http`].
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PlansError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PlansError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: SecretString::new(api_key.into()),
        })
    }

    /// Get the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the lookup URL for an operator and circle.
    fn plans_url(&self, operator: &str, circle: &str) -> String {
        let base = self.base_url.trim_end_matches(['?', '&']);
        let separator = if base.contains('?') { '&' } else { '?' };

        format!(
            "{}{}api_key={}&operator={}&circle={}",
            base,
            separator,
            encode(self.api_key.expose_secret()),
            encode(operator),
            encode(circle)
        )
    }

    /// Fetch the plans an operator offers in a circle.
    ///
    /// The body is decoded as an envelope whatever the HTTP status; the
    /// envelope's own status code decides success. No retries.
    #[instrument(skip(self))]
    pub async fn find_plans(&self, operator: &str, circle: &str) -> Result<Vec<Plan>, PlansError> {
        let url = self.plans_url(operator, circle);

        // The URL carries the API key; keep it out of error messages.
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PlansError::Http(e.without_url()))?;
        let http_status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| PlansError::Http(e.without_url()))?;

        debug!(status = %http_status, bytes = body.len(), "Received plans response");

        let envelope: PlansEnvelope = serde_json::from_slice(&body)?;

        if !envelope.is_success() {
            warn!(
                status = envelope.status_code,
                message = %envelope.status_text,
                "Plans API reported failure"
            );
            return Err(PlansError::Upstream {
                status: envelope.status_code,
                message: envelope.status_text,
            });
        }

        debug!(count = envelope.data.len(), "Plans found");
        Ok(envelope.data)
    }
}
