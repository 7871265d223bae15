//! Cloudflare adapter error types.

/// Cloudflare adapter error conditions.
///
/// Every failure mode of a `/ai/v1/responses` call maps to exactly one
/// variant, so boundary code can flatten errors to display text without
/// losing which stage failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CloudflareErrorKind {
    /// Account ID, API key, or model ID missing
    Config(String),
    /// Endpoint returned a client or server error status
    Http {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase
        reason: String,
        /// Raw error body
        body: String,
    },
    /// Transport-level failure (connection, DNS, reset)
    Network(String),
    /// Response body is not valid JSON
    Decode(String),
    /// Response parsed but carried no assistant output text
    Extraction {
        /// Model the request was issued for
        model: String,
    },
    /// Catch-all for unforeseen failures
    Unexpected(String),
}

impl std::fmt::Display for CloudflareErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CloudflareErrorKind::Config(msg) => {
                write!(f, "Cloudflare configuration error: {}", msg)
            }
            CloudflareErrorKind::Http {
                status,
                reason,
                body,
            } => write!(
                f,
                "HTTP error from Cloudflare API: {} {} - {}",
                status, reason, body
            ),
            CloudflareErrorKind::Network(msg) => {
                write!(f, "Network error while calling Cloudflare API: {}", msg)
            }
            CloudflareErrorKind::Decode(msg) => {
                write!(f, "Cloudflare API response was not valid JSON: {}", msg)
            }
            CloudflareErrorKind::Extraction { model } => write!(
                f,
                "Cloudflare API call succeeded for model {}, but no reply text could be extracted",
                model
            ),
            CloudflareErrorKind::Unexpected(msg) => {
                write!(f, "Unexpected error: {}", msg)
            }
        }
    }
}

/// Cloudflare adapter error with source location.
#[derive(Debug, Clone)]
pub struct CloudflareError {
    /// The error condition
    pub kind: CloudflareErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl CloudflareError {
    /// Create a new CloudflareError with the given kind at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use manifold_error::{CloudflareError, CloudflareErrorKind};
    ///
    /// let err = CloudflareError::new(CloudflareErrorKind::Network("connection reset".into()));
    /// assert!(err.to_string().contains("connection reset"));
    /// ```
    #[track_caller]
    pub fn new(kind: CloudflareErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CloudflareErrorKind {
        &self.kind
    }
}

impl std::fmt::Display for CloudflareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for CloudflareError {}
