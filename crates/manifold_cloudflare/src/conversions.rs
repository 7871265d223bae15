//! Conversions between host requests and the Cloudflare wire format.

use crate::dto::{ResponsesPayload, ResponsesRequest};
use manifold_core::PipeRequest;
use manifold_error::{CloudflareError, CloudflareErrorKind};
use serde_json::{Map, Value};

/// Marker introducing a Cloudflare model id inside a host model field.
///
/// Hosts may prefix the selected model with their own tag (for example
/// `"openwebui-tag@cf/openai/gpt-oss-120b"`); the effective id starts at
/// this marker.
pub const MODEL_ID_MARKER: &str = "@cf/";

/// Keys owned by the adapter, never taken from request extras.
const RESERVED_KEYS: [&str; 3] = ["model", "messages", "stream"];

/// Resolves the effective model id from a host model field.
///
/// Returns the substring from the first `@cf/` marker to the end of the
/// field, or the whole field verbatim when no marker is present.
///
/// # Examples
///
/// ```
/// use manifold_cloudflare::resolve_model_id;
///
/// assert_eq!(
///     resolve_model_id("openwebui-tag@cf/openai/gpt-oss-120b"),
///     "@cf/openai/gpt-oss-120b"
/// );
/// assert_eq!(resolve_model_id("gpt-4"), "gpt-4");
/// ```
pub fn resolve_model_id(full_model_id: &str) -> &str {
    match full_model_id.find(MODEL_ID_MARKER) {
        Some(start) => &full_model_id[start..],
        None => full_model_id,
    }
}

/// Builds the outbound request body from a host request.
///
/// The three core fields are fixed by the adapter; extras are filtered of
/// reserved keys before the merge, so they can add fields but never
/// override `model`, `input`, or `stream`.
///
/// # Errors
///
/// Returns an error if the request body cannot be assembled.
pub fn to_responses_request(
    request: &PipeRequest,
    model_id: &str,
) -> Result<ResponsesRequest, CloudflareError> {
    let extra: Map<String, Value> = request
        .extra
        .iter()
        .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    ResponsesRequest::builder()
        .model(model_id)
        .input(request.messages.clone())
        .stream(false)
        .extra(extra)
        .build()
        .map_err(|e| {
            CloudflareError::new(CloudflareErrorKind::Unexpected(format!(
                "Failed to build request payload: {}",
                e
            )))
        })
}

/// Extracts the assistant reply text from a parsed response payload.
///
/// Concatenates the text of every `output_text` content part inside
/// `message` items authored by the assistant, in encounter order, then
/// trims surrounding whitespace. Returns an empty string when nothing
/// matches.
pub fn extract_output_text(payload: &ResponsesPayload) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for item in &payload.output {
        if item.kind.as_deref() != Some("message") || item.role.as_deref() != Some("assistant") {
            continue;
        }
        for part in &item.content {
            if part.kind.as_deref() == Some("output_text") {
                if let Some(text) = &part.text {
                    parts.push(text.as_str());
                }
            }
        }
    }
    parts.concat().trim().to_string()
}
