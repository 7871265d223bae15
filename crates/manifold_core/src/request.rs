//! Inbound request types from the host.

use crate::ChatMessage;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A chat request handed to a pipe by the host.
///
/// The host sends a JSON body with at least `model` and `messages`;
/// any further keys (temperature, max output tokens, provider-specific
/// knobs) are captured in `extra` and forwarded to the provider.
///
/// # Examples
///
/// ```
/// use manifold_core::{ChatMessage, PipeRequest};
///
/// let request: PipeRequest = serde_json::from_str(
///     r#"{"model":"gpt-4","messages":[{"role":"user","content":"hi"}],"temperature":0.7}"#,
/// ).unwrap();
///
/// assert_eq!(request.model, "gpt-4");
/// assert_eq!(request.messages, vec![ChatMessage::user("hi")]);
/// assert_eq!(request.extra["temperature"], 0.7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipeRequest {
    /// Model field as selected in the host (may embed a provider prefix)
    #[serde(default)]
    pub model: String,
    /// Conversation messages in order
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// Remaining request fields, forwarded verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PipeRequest {
    /// Creates a new request from a model id and messages.
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            extra: Map::new(),
        }
    }

    /// Adds an extra field to forward to the provider.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
