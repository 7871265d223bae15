//! The host-facing pipe trait.

use crate::{ModelDescriptor, PipeRequest};
use async_trait::async_trait;
use futures_util::Stream;
use std::pin::Pin;

/// Lazy sequence of output chunks produced by a pipe invocation.
///
/// Errors do not cross this boundary as structured values; a failed call
/// yields its description as an ordinary text chunk.
pub type ChunkStream = Pin<Box<dyn Stream<Item = String> + Send>>;

/// Trait for adapter plugins that expose remote models to the host.
///
/// The host calls [`Pipe::models`] once per registration refresh to list
/// selectable models, and [`Pipe::pipe`] once per chat request.
#[async_trait]
pub trait Pipe: Send + Sync {
    /// Stable identifier for this pipe within the host.
    fn id(&self) -> &'static str;

    /// Lists the models this pipe currently exposes.
    ///
    /// Derived from live configuration on every call so configuration
    /// updates are reflected without re-registration.
    fn models(&self) -> Vec<ModelDescriptor>;

    /// Handles one chat request, yielding output chunks in order.
    ///
    /// The stream terminates after the final chunk; a failure yields
    /// exactly one chunk describing the error.
    async fn pipe(&self, request: PipeRequest) -> ChunkStream;
}
