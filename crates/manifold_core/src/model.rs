//! Model descriptors for host registration.

use serde::{Deserialize, Serialize};

/// A selectable model entry published to the host.
///
/// # Examples
///
/// ```
/// use manifold_core::ModelDescriptor;
///
/// let model = ModelDescriptor::new("@cf/openai/gpt-oss-120b", "Cloudflare: gpt-oss-120b");
/// assert_eq!(model.id, "@cf/openai/gpt-oss-120b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Provider-specific model identifier
    pub id: String,
    /// Display name shown in the host's model picker
    pub name: String,
}

impl ModelDescriptor {
    /// Creates a new descriptor from an id and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
