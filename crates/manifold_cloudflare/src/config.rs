//! Valve settings for the Cloudflare adapter.

use derive_builder::Builder;
use derive_getters::Getters;
use manifold_core::ModelDescriptor;
use manifold_error::{ConfigError, ManifoldResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Models exposed when no list is configured.
pub const DEFAULT_MODEL_IDS: &str = "@cf/openai/gpt-oss-120b,@cf/openai/gpt-oss-20b";

/// Cloudflare REST API base.
pub const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

fn default_model_ids() -> String {
    DEFAULT_MODEL_IDS.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// User-supplied settings for the Cloudflare adapter.
///
/// Read-only during request handling; the host replaces the whole value
/// on configuration updates. Missing account id or API key surface as a
/// per-request configuration error rather than a construction failure,
/// so a partially configured pipe still registers with the host.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into), default)]
pub struct CloudflareConfig {
    /// Cloudflare account ID
    #[serde(default)]
    account_id: String,
    /// Cloudflare Workers AI API key (secret)
    #[serde(default)]
    api_key: String,
    /// Comma-separated model IDs to expose
    #[serde(default = "default_model_ids")]
    model_ids: String,
    /// API base URL; override points the adapter at a different host
    #[serde(default = "default_base_url")]
    base_url: String,
}

impl Default for CloudflareConfig {
    fn default() -> Self {
        Self {
            account_id: String::new(),
            api_key: String::new(),
            model_ids: default_model_ids(),
            base_url: default_base_url(),
        }
    }
}

impl CloudflareConfig {
    /// Creates a new builder for `CloudflareConfig`.
    pub fn builder() -> CloudflareConfigBuilder {
        CloudflareConfigBuilder::default()
    }

    /// Loads settings from the environment.
    ///
    /// Reads `CLOUDFLARE_ACCOUNT_ID`, `CLOUDFLARE_API_KEY`,
    /// `CLOUDFLARE_MODEL_IDS`, and `CLOUDFLARE_BASE_URL`, falling back to
    /// defaults for any that are unset. A `.env` file is honored when
    /// present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Ok(account_id) = std::env::var("CLOUDFLARE_ACCOUNT_ID") {
            config.account_id = account_id;
        }
        if let Ok(api_key) = std::env::var("CLOUDFLARE_API_KEY") {
            config.api_key = api_key;
        }
        if let Ok(model_ids) = std::env::var("CLOUDFLARE_MODEL_IDS") {
            config.model_ids = model_ids;
        }
        if let Ok(base_url) = std::env::var("CLOUDFLARE_BASE_URL") {
            config.base_url = base_url;
        }
        config
    }

    /// Loads settings from a TOML file.
    #[tracing::instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> ManifoldResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }

    /// Lists the models this configuration exposes for host registration.
    ///
    /// Splits `model_ids` on commas, trims whitespace, and drops empty
    /// entries; order is preserved and duplicates are not collapsed. The
    /// display name is the last path segment of the model id.
    ///
    /// # Examples
    ///
    /// ```
    /// use manifold_cloudflare::CloudflareConfig;
    ///
    /// let config = CloudflareConfig::builder()
    ///     .model_ids("@cf/a/b, @cf/c/d")
    ///     .build()
    ///     .unwrap();
    /// let models = config.models();
    ///
    /// assert_eq!(models[0].id, "@cf/a/b");
    /// assert_eq!(models[0].name, "Cloudflare: b");
    /// ```
    pub fn models(&self) -> Vec<ModelDescriptor> {
        self.model_ids
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| {
                let label = id.rsplit('/').next().unwrap_or(id);
                ModelDescriptor::new(id, format!("Cloudflare: {}", label))
            })
            .collect()
    }

    /// Returns the response-generation endpoint URL for this account.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/accounts/{}/ai/v1/responses",
            self.base_url.trim_end_matches('/'),
            self.account_id
        )
    }
}
