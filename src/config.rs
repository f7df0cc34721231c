//! Client configuration
//!
//! A [`ClientConfig`] can be written in YAML or assembled from environment
//! variables:
//!
//! ```yaml
//! api_key: sk_test_...
//! base_url: https://api.stripe.com/v1
//! timeout_secs: 30
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::http::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "STRIPE_API_KEY";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "STRIPE_API_BASE";
/// Environment variable overriding the request timeout (seconds)
pub const ENV_TIMEOUT: &str = "STRIPE_TIMEOUT_SECS";

/// Settings needed to talk to the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Secret API key
    pub api_key: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    80
}

fn default_user_agent() -> String {
    format!("stripe-client/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Create a config with defaults for everything but the key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }

    /// Override the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the timeout
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }

    /// Build from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY).ok_or_else(|| Error::missing_field(ENV_API_KEY))?;
        let mut config = Self::new(api_key);

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            config.timeout_secs = timeout
                .parse()
                .map_err(|_| Error::invalid_value(ENV_TIMEOUT, format!("not a number: {timeout}")))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check required fields and URL syntax
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::missing_field("api_key"));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_value("base_url", e.to_string()))?;
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be greater than zero"));
        }
        Ok(())
    }
}
