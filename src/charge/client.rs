//! Client for the `/charges` endpoints

use super::types::{CaptureParams, Charge, ChargeListParams, ChargeParams};
use crate::error::Result;
use crate::http::{call_json, Backend, BackendPages};
use crate::pagination::ListIter;
use crate::params::{path_segment, AppendTo, Params};
use crate::refund::{self, Refund, RefundParams};
use crate::types::Method;
use std::sync::Arc;
use tracing::info;

/// Iterator over charges
pub type ChargeIter = ListIter<Charge, BackendPages<Charge>>;

/// Invokes the `/charges` APIs
#[derive(Clone)]
pub struct Client {
    backend: Arc<dyn Backend>,
    key: String,
}

impl Client {
    /// Create a client over `backend`, authenticating with `key`
    pub fn new(backend: Arc<dyn Backend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Create a new charge
    pub async fn create(&self, params: &ChargeParams) -> Result<Charge> {
        let charge: Charge = self.call(Method::POST, "/charges", params).await?;
        info!(charge = %charge.id, amount = charge.amount, "Created charge");
        Ok(charge)
    }

    /// Retrieve a charge
    pub async fn get(&self, id: &str, params: Option<&Params>) -> Result<Charge> {
        let path = format!("/charges/{}", path_segment(id, "id")?);
        self.call(Method::GET, &path, params).await
    }

    /// Update a charge's description or metadata
    pub async fn update(&self, id: &str, params: &ChargeParams) -> Result<Charge> {
        let path = format!("/charges/{}", path_segment(id, "id")?);
        self.call(Method::POST, &path, params).await
    }

    /// Capture a charge created with `no_capture`; `None` captures the full amount
    pub async fn capture(&self, id: &str, params: Option<&CaptureParams>) -> Result<Charge> {
        let path = format!("/charges/{}/capture", path_segment(id, "id")?);
        let charge: Charge = self.call(Method::POST, &path, params).await?;
        info!(charge = %charge.id, captured = charge.captured, "Captured charge");
        Ok(charge)
    }

    /// Refund a charge, fully or partially
    pub async fn refund(&self, params: &RefundParams) -> Result<Refund> {
        refund::Client::new(Arc::clone(&self.backend), self.key.clone())
            .create(params)
            .await
    }

    /// List charges, lazily fetching pages as the iterator advances
    pub fn list(&self, params: &ChargeListParams) -> ChargeIter {
        let source = BackendPages::new(Arc::clone(&self.backend), "/charges", self.key.clone());
        ListIter::new(params.list.clone(), params.to_form(), source)
    }

    async fn call<P: AppendTo>(&self, method: Method, path: &str, params: P) -> Result<Charge> {
        call_json(self.backend.as_ref(), method, path, &self.key, &params.to_form()).await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("charge::Client").finish_non_exhaustive()
    }
}
