//! Lazy iterator over a paginated collection

use super::types::{ListMeta, PageSource};
use crate::error::{Error, Result};
use crate::params::{AppendTo, FormBody, ListParams};
use futures::stream::{self, Stream};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Lifecycle of a [`ListIter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterState {
    /// Another page may be fetched once the buffer drains
    Open,
    /// The source has no more pages, or single-page mode used its page
    Exhausted,
    /// A fetch failed; the error was returned once
    Failed,
}

impl IterState {
    /// Whether no further fetch will happen
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Open)
    }
}

/// Item-at-a-time traversal over a remote collection
///
/// Pages are fetched lazily from a [`PageSource`]. After every successful
/// fetch the offset filter of the list params is advanced by the number of
/// items received. A fetch error, an empty page, a page reporting no more
/// data, or the first page in single-page mode makes the iterator terminal;
/// no fetch happens after that.
pub struct ListIter<T, S> {
    source: S,
    query: FormBody,
    params: ListParams,
    buffer: VecDeque<T>,
    meta: Option<ListMeta>,
    state: IterState,
    fetches: usize,
}

impl<T, S> ListIter<T, S>
where
    T: Send,
    S: PageSource<T>,
{
    /// Create an iterator. `query` holds the resource-specific parameters;
    /// the list params are appended to it on every fetch.
    pub fn new(params: ListParams, query: FormBody, source: S) -> Self {
        Self {
            source,
            query,
            params,
            buffer: VecDeque::new(),
            meta: None,
            state: IterState::Open,
            fetches: 0,
        }
    }

    /// True while buffered items remain or another page may be fetched
    pub fn has_more(&self) -> bool {
        !self.buffer.is_empty() || self.state == IterState::Open
    }

    /// Return the next item, fetching a page first when the buffer is empty.
    ///
    /// Returns `Ok(None)` at end of stream. A fetch error is returned from
    /// the call that triggered it, after which the iterator is terminal.
    pub async fn advance(&mut self) -> Result<Option<T>> {
        if let Some(item) = self.buffer.pop_front() {
            return Ok(Some(item));
        }
        if self.state.is_terminal() {
            return Ok(None);
        }

        self.fetch().await?;
        Ok(self.buffer.pop_front())
    }

    /// Metadata of the most recent fetch
    pub fn current_metadata(&self) -> Option<&ListMeta> {
        self.meta.as_ref()
    }

    /// Current list params, including the advanced offset filter
    pub fn params(&self) -> &ListParams {
        &self.params
    }

    /// Lifecycle state
    pub fn state(&self) -> IterState {
        self.state
    }

    /// Number of successful page fetches so far
    pub fn fetch_count(&self) -> usize {
        self.fetches
    }

    /// Drain the iterator into a vector, stopping at the first error
    pub async fn collect_all(mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(item) = self.advance().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Convert into a [`Stream`] of items; the stream ends after an error
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> {
        stream::try_unfold(self, |mut iter| async move {
            let next = iter.advance().await?;
            Ok::<_, Error>(next.map(|item| (item, iter)))
        })
    }

    async fn fetch(&mut self) -> Result<()> {
        let mut query = self.query.clone();
        self.params.append_to(&mut query);

        debug!(
            page = self.fetches + 1,
            params = query.len(),
            "Fetching page"
        );

        let page = match self.source.fetch_page(query).await {
            Ok(page) => page,
            Err(e) => {
                warn!(page = self.fetches + 1, error = %e, "Page fetch failed, stopping iteration");
                self.state = IterState::Failed;
                return Err(e);
            }
        };

        self.fetches += 1;
        let count = page.items.len();
        self.params.filters.advance_offset(count as u64);

        if count == 0 || self.params.single || !page.meta.has_more {
            debug!(
                fetched = self.fetches,
                last_page_items = count,
                "List exhausted"
            );
            self.state = IterState::Exhausted;
        }

        self.meta = Some(page.meta);
        self.buffer.extend(page.items);
        Ok(())
    }
}

impl<T, S> std::fmt::Debug for ListIter<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListIter")
            .field("params", &self.params)
            .field("buffered", &self.buffer.len())
            .field("meta", &self.meta)
            .field("state", &self.state)
            .field("fetches", &self.fetches)
            .finish_non_exhaustive()
    }
}
