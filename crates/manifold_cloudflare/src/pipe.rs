//! Host-facing pipe boundary.

use crate::client::CloudflareClient;
use crate::config::CloudflareConfig;
use async_stream::stream;
use async_trait::async_trait;
use manifold_core::{ChunkStream, ModelDescriptor, Pipe, PipeRequest};

/// Exposes Cloudflare Workers AI models as host-selectable entries.
///
/// Errors never cross this boundary as values; a failed call yields the
/// error's description as its single output chunk.
#[derive(Debug, Clone)]
pub struct CloudflarePipe {
    client: CloudflareClient,
}

impl CloudflarePipe {
    /// Creates a pipe from valve settings.
    pub fn new(config: CloudflareConfig) -> Self {
        Self {
            client: CloudflareClient::new(config),
        }
    }

    /// Creates a pipe configured from the environment.
    pub fn from_env() -> Self {
        Self::new(CloudflareConfig::from_env())
    }

    /// Creates a pipe over an existing client.
    pub fn with_client(client: CloudflareClient) -> Self {
        Self { client }
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &CloudflareClient {
        &self.client
    }
}

#[async_trait]
impl Pipe for CloudflarePipe {
    fn id(&self) -> &'static str {
        "cloudflare_responses"
    }

    fn models(&self) -> Vec<ModelDescriptor> {
        self.client.config().models()
    }

    async fn pipe(&self, request: PipeRequest) -> ChunkStream {
        let client = self.client.clone();
        Box::pin(stream! {
            match client.respond(&request).await {
                Ok(text) => yield text,
                Err(e) => yield e.to_string(),
            }
        })
    }
}
