//! Client for the refund endpoints

use super::types::{Refund, RefundListParams, RefundParams};
use crate::error::Result;
use crate::http::{call_json, Backend, BackendPages};
use crate::pagination::ListIter;
use crate::params::{path_segment, AppendTo, FormBody};
use crate::types::Method;
use std::sync::Arc;
use tracing::info;

/// Iterator over refunds
pub type RefundIter = ListIter<Refund, BackendPages<Refund>>;

/// Invokes the refund APIs
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

    /// Refund a charge
    pub async fn create(&self, params: &RefundParams) -> Result<Refund> {
        let path = format!("/charges/{}/refunds", path_segment(&params.charge, "charge")?);
        let refund: Refund = self.call(Method::POST, &path, params).await?;
        info!(refund = %refund.id, charge = %refund.charge, amount = refund.amount, "Created refund");
        Ok(refund)
    }

    /// Retrieve a refund
    pub async fn get(&self, id: &str, params: &RefundParams) -> Result<Refund> {
        let path = refund_path(&params.charge, id)?;
        self.call(Method::GET, &path, params).await
    }

    /// Update a refund's metadata
    pub async fn update(&self, id: &str, params: &RefundParams) -> Result<Refund> {
        let path = refund_path(&params.charge, id)?;
        self.call(Method::POST, &path, params).await
    }

    /// List the refunds of a charge
    pub fn list(&self, params: &RefundListParams) -> Result<RefundIter> {
        let path = format!("/charges/{}/refunds", path_segment(&params.charge, "charge")?);
        let source = BackendPages::new(Arc::clone(&self.backend), path, self.key.clone());
        Ok(ListIter::new(params.list.clone(), FormBody::new(), source))
    }

    async fn call(&self, method: Method, path: &str, params: &RefundParams) -> Result<Refund> {
        call_json(self.backend.as_ref(), method, path, &self.key, &params.to_form()).await
    }
}

fn refund_path(charge: &str, id: &str) -> Result<String> {
    Ok(format!(
        "/charges/{}/refunds/{}",
        path_segment(charge, "charge")?,
        path_segment(id, "id")?
    ))
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("refund::Client").finish_non_exhaustive()
    }
}
