//! Core data types for the manifold adapter library.
//!
//! A manifold exposes one or more remote models as selectable entries in a
//! host chat-orchestration platform. This crate provides the
//! provider-agnostic request types and the [`Pipe`] trait the host calls
//! through; provider crates implement the trait over their own transport.

mod message;
mod model;
mod pipe;
mod request;

pub use message::ChatMessage;
pub use model::ModelDescriptor;
pub use pipe::{ChunkStream, Pipe};
pub use request::PipeRequest;
