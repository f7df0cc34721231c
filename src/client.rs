//! Entry point tying configuration, transport and resources together

use crate::charge;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{Backend, BackendConfig, HttpBackend};
use crate::refund;
use std::sync::Arc;

/// API client sharing one backend and key across resources
#[derive(Clone)]
pub struct Client {
    backend: Arc<dyn Backend>,
    key: String,
}

impl Client {
    /// Build an HTTP-backed client from validated configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let backend = HttpBackend::with_config(BackendConfig::from(config))?;
        Ok(Self::with_backend(Arc::new(backend), config.api_key.clone()))
    }

    /// Build a client over any backend
    pub fn with_backend(backend: Arc<dyn Backend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// `/charges` APIs
    pub fn charges(&self) -> charge::Client {
        charge::Client::new(Arc::clone(&self.backend), self.key.clone())
    }

    /// Refund APIs
    pub fn refunds(&self) -> refund::Client {
        refund::Client::new(Arc::clone(&self.backend), self.key.clone())
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
