//! Data transfer objects for the `/ai/v1/responses` wire format.

use derive_builder::Builder;
use derive_getters::Getters;
use manifold_core::ChatMessage;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outbound request body for the responses endpoint.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ResponsesRequest {
    /// Effective model identifier
    model: String,
    /// Conversation messages, forwarded as the `input` field
    input: Vec<ChatMessage>,
    /// Always false; streaming is disabled
    stream: bool,
    /// Caller-supplied extra fields, merged at the top level
    #[builder(default)]
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ResponsesRequest {
    /// Creates a new builder for `ResponsesRequest`.
    pub fn builder() -> ResponsesRequestBuilder {
        ResponsesRequestBuilder::default()
    }
}

/// A content part within an output item.
///
/// Only parts with type `output_text` carry reply text; everything else
/// (reasoning traces, tool activity) is ignored during extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentPart {
    /// Part type discriminator
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Text payload for `output_text` parts
    #[serde(default)]
    pub text: Option<String>,
}

/// One item in the response's `output` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputItem {
    /// Item type discriminator
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Role of the item's author
    #[serde(default)]
    pub role: Option<String>,
    /// Ordered content parts
    #[serde(default)]
    pub content: Vec<ContentPart>,
}

/// Inbound response payload from the responses endpoint.
///
/// All fields are lenient defaults so unexpected shapes degrade to an
/// empty extraction rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsesPayload {
    /// Output items in encounter order
    #[serde(default)]
    pub output: Vec<OutputItem>,
}
