//! Message types for conversation history.

use serde::{Deserialize, Serialize};

/// A chat message in role/content form.
///
/// Roles are kept as plain strings because the host forwards messages
/// verbatim and providers accept roles beyond the usual three.
///
/// # Examples
///
/// ```
/// use manifold_core::ChatMessage;
///
/// let message = ChatMessage::user("Hello!");
///
/// assert_eq!(message.role, "user");
/// assert_eq!(message.content, "Hello!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender ("system", "user", "assistant", ...)
    pub role: String,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Creates a new message with the given role and content.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}
