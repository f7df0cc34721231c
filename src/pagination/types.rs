//! Pagination types and traits
//!
//! Defines the page-source abstraction the list iterator is generic over.

use crate::error::Result;
use crate::params::FormBody;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Metadata returned alongside a page of results
///
/// Describes the most recent page only; the iterator replaces it on every
/// fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    /// Whether the server holds more items past this page
    #[serde(default)]
    pub has_more: bool,
    /// Total size of the collection, when requested with `include[]=total_count`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    /// URL of the collection
    #[serde(default)]
    pub url: String,
}

impl ListMeta {
    /// Metadata for a page with more results behind it
    pub fn more() -> Self {
        Self {
            has_more: true,
            ..Default::default()
        }
    }

    /// Metadata for the last page
    pub fn last() -> Self {
        Self::default()
    }

    /// Attach a total count
    #[must_use]
    pub fn with_total(mut self, total: u64) -> Self {
        self.total_count = Some(total);
        self
    }

    /// Attach the collection URL
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// One fetched page
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: ListMeta,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(items: Vec<T>, meta: ListMeta) -> Self {
        Self { items, meta }
    }
}

/// A remote collection that can be fetched one page at a time
#[async_trait]
pub trait PageSource<T>: Send {
    /// Fetch the page described by `query`
    async fn fetch_page(&mut self, query: FormBody) -> Result<Page<T>>;
}

/// Adapts a closure returning a future into a [`PageSource`]
///
/// ```rust,ignore
/// let source = FetchFn(|query: FormBody| async move {
///     Ok(Page::new(vec![1, 2, 3], ListMeta::last()))
/// });
/// ```
pub struct FetchFn<F>(pub F);

#[async_trait]
impl<T, F, Fut> PageSource<T> for FetchFn<F>
where
    T: Send + 'static,
    F: FnMut(FormBody) -> Fut + Send,
    Fut: Future<Output = Result<Page<T>>> + Send + 'static,
{
    async fn fetch_page(&mut self, query: FormBody) -> Result<Page<T>> {
        (self.0)(query).await
    }
}

impl<F> std::fmt::Debug for FetchFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchFn").finish_non_exhaustive()
    }
}
