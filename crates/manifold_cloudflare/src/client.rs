//! HTTP client for the Cloudflare responses endpoint.

use crate::config::CloudflareConfig;
use crate::conversions;
use crate::dto::ResponsesPayload;
use manifold_core::PipeRequest;
use manifold_error::{CloudflareError, CloudflareErrorKind};
use reqwest::Client;
use std::sync::OnceLock;
use tracing::{debug, error, instrument};

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Returns the process-wide HTTP client, creating it on first use.
///
/// Reused across invocations so connections are pooled instead of
/// re-established per request.
pub fn shared_client() -> Client {
    SHARED_CLIENT.get_or_init(Client::new).clone()
}

/// Client for the Cloudflare Workers AI responses endpoint.
///
/// Performs exactly one POST per call: no retries, no internal
/// parallelism, no state between invocations beyond the connection pool.
#[derive(Debug, Clone)]
pub struct CloudflareClient {
    client: Client,
    config: CloudflareConfig,
}

impl CloudflareClient {
    /// Creates a client over the shared connection pool.
    pub fn new(config: CloudflareConfig) -> Self {
        Self {
            client: shared_client(),
            config,
        }
    }

    /// Creates a client with an injected `reqwest::Client`.
    pub fn with_client(client: Client, config: CloudflareConfig) -> Self {
        Self { client, config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &CloudflareConfig {
        &self.config
    }

    /// Executes one chat request against the responses endpoint.
    ///
    /// # Errors
    ///
    /// Returns a [`CloudflareError`] on missing configuration, transport
    /// failure, non-2xx status, undecodable body, or a body with no
    /// extractable assistant text. No failure escapes as a panic.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn respond(&self, request: &PipeRequest) -> Result<String, CloudflareError> {
        let model_id = conversions::resolve_model_id(&request.model);

        if self.config.account_id().is_empty()
            || self.config.api_key().is_empty()
            || model_id.is_empty()
        {
            return Err(CloudflareError::new(CloudflareErrorKind::Config(
                "Cloudflare account ID, API key, or model ID is missing".to_string(),
            )));
        }

        let payload = conversions::to_responses_request(request, model_id)?;
        let url = self.config.endpoint_url();

        debug!(
            model = %model_id,
            message_count = payload.input().len(),
            "Sending request"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                CloudflareError::new(CloudflareErrorKind::Network(e.to_string()))
            })?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "API error");
            return Err(CloudflareError::new(CloudflareErrorKind::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            }));
        }

        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read response body");
            CloudflareError::new(CloudflareErrorKind::Network(e.to_string()))
        })?;

        let raw: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Response body was not valid JSON");
            CloudflareError::new(CloudflareErrorKind::Decode(e.to_string()))
        })?;

        // Shape mismatches degrade to an empty extraction, not a decode error.
        let parsed: ResponsesPayload = serde_json::from_value(raw.clone()).unwrap_or_default();
        let text = conversions::extract_output_text(&parsed);

        if text.is_empty() {
            let pretty = serde_json::to_string_pretty(&raw).unwrap_or_else(|_| raw.to_string());
            error!(model = %model_id, payload = %pretty, "Unparsable response");
            return Err(CloudflareError::new(CloudflareErrorKind::Extraction {
                model: model_id.to_string(),
            }));
        }

        debug!(model = %model_id, length = text.len(), "Received response");
        Ok(text)
    }
}
