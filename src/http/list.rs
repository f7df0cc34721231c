//! Page source over a list endpoint

use super::backend::{call_json, Backend};
use crate::error::Result;
use crate::pagination::{ListMeta, Page, PageSource};
use crate::params::FormBody;
use crate::types::Method;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// List envelope returned by every collection endpoint
///
/// ```json
/// {"object": "list", "data": [...], "has_more": true, "url": "/v1/charges"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(flatten)]
    pub meta: ListMeta,
}

impl<T> From<ListResponse<T>> for Page<T> {
    fn from(list: ListResponse<T>) -> Self {
        Page::new(list.data, list.meta)
    }
}

/// [`PageSource`] that GETs a list path through a [`Backend`]
pub struct BackendPages<T> {
    backend: Arc<dyn Backend>,
    path: String,
    key: String,
    _item: PhantomData<fn() -> T>,
}

impl<T> BackendPages<T> {
    /// Create a source for `path`
    pub fn new(backend: Arc<dyn Backend>, path: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            backend,
            path: path.into(),
            key: key.into(),
            _item: PhantomData,
        }
    }

    /// Path this source lists
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[async_trait]
impl<T> PageSource<T> for BackendPages<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch_page(&mut self, query: FormBody) -> Result<Page<T>> {
        let list: ListResponse<T> =
            call_json(self.backend.as_ref(), Method::GET, &self.path, &self.key, &query).await?;
        debug!(path = %self.path, items = list.data.len(), has_more = list.meta.has_more, "Fetched list page");
        Ok(list.into())
    }
}

impl<T> std::fmt::Debug for BackendPages<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendPages")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
