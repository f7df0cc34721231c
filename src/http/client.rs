//! HTTP backend built on reqwest
//!
//! Sends form-encoded requests to the API and turns responses into JSON or
//! classified errors. There are no retries here; callers see the first
//! failure.

use super::backend::Backend;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::params::FormBody;
use crate::types::{JsonValue, Method};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.stripe.com/v1";

/// Configuration for the HTTP backend
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(80),
            default_headers: HashMap::new(),
            user_agent: format!("stripe-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl BackendConfig {
    /// Create a new config builder
    pub fn builder() -> BackendConfigBuilder {
        BackendConfigBuilder::default()
    }
}

impl From<&ClientConfig> for BackendConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            default_headers: HashMap::new(),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Builder for backend config
#[derive(Default)]
pub struct BackendConfigBuilder {
    config: BackendConfig,
}

impl BackendConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> BackendConfig {
        self.config
    }
}

/// reqwest-backed [`Backend`]
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    /// Create a backend with custom configuration
    pub fn with_config(config: BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Backend configuration
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Build full URL from path
    pub fn build_url(&self, path: &str) -> Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(Url::parse(path)?);
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    fn classify_send_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            return Error::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            };
        }
        Error::Http(e)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn call(
        &self,
        method: Method,
        path: &str,
        key: &str,
        form: &FormBody,
    ) -> Result<JsonValue> {
        let url = self.build_url(path)?;
        let mut req = self.client.request(method.into(), url.clone());

        for (name, value) in &self.config.default_headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if !key.is_empty() {
            req = req.basic_auth(key, None::<&str>);
        }

        if method.uses_query() {
            if !form.is_empty() {
                req = req.query(form.pairs());
            }
        } else {
            req = req
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(form.encode());
        }

        debug!(%method, %url, params = form.len(), "Sending request");

        let response = req.send().await.map_err(|e| self.classify_send_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify_send_error(e))?;

        if !status.is_success() {
            warn!(%method, %url, status = status.as_u16(), "Request failed");
            return Err(Error::from_response(status.as_u16(), &body));
        }

        debug!(%method, %url, status = status.as_u16(), "Request succeeded");
        Ok(serde_json::from_str(&body)?)
    }
}

impl std::fmt::Debug for HttpBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpBackend")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
