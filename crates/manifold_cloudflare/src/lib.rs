//! Cloudflare Workers AI manifold adapter.
//!
//! Exposes models served by Cloudflare's `/ai/v1/responses` endpoint as
//! selectable entries in a host chat-orchestration platform. Each chat
//! request is one outbound POST; streaming is disabled, so every call
//! produces exactly one output chunk or one error chunk.

mod client;
mod config;
mod conversions;
mod dto;
mod pipe;

pub use client::{CloudflareClient, shared_client};
pub use config::{CloudflareConfig, CloudflareConfigBuilder, DEFAULT_BASE_URL, DEFAULT_MODEL_IDS};
pub use conversions::{
    MODEL_ID_MARKER, extract_output_text, resolve_model_id, to_responses_request,
};
pub use dto::{ContentPart, OutputItem, ResponsesPayload, ResponsesRequest, ResponsesRequestBuilder};
pub use pipe::CloudflarePipe;
