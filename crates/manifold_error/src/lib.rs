//! Error types for the manifold adapter library.
//!
//! This crate provides the foundation error types used throughout the
//! manifold workspace.

mod cloudflare;
mod config;

pub use cloudflare::{CloudflareError, CloudflareErrorKind};
pub use config::ConfigError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum ManifoldErrorKind {
    /// Cloudflare adapter error
    Cloudflare(CloudflareError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for ManifoldErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifoldErrorKind::Cloudflare(e) => write!(f, "{}", e),
            ManifoldErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Manifold error with kind discrimination.
#[derive(Debug)]
pub struct ManifoldError(Box<ManifoldErrorKind>);

impl ManifoldError {
    /// Create a new error from a kind.
    pub fn new(kind: ManifoldErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ManifoldErrorKind {
        &self.0
    }
}

impl std::fmt::Display for ManifoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Manifold Error: {}", self.0)
    }
}

impl std::error::Error for ManifoldError {}

// Generic From implementation for any type that converts to ManifoldErrorKind
impl<T> From<T> for ManifoldError
where
    T: Into<ManifoldErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for manifold operations.
pub type ManifoldResult<T> = std::result::Result<T, ManifoldError>;
