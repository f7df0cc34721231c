//! Pagination module
//!
//! Lazily walks a remote collection resource one item at a time.
//!
//! # Overview
//!
//! A [`ListIter`] is built from [`ListParams`](crate::params::ListParams), a
//! base query body, and a [`PageSource`]. It fetches a page only when its
//! buffer runs dry, advances the `offset` filter by the size of each page, and
//! stops for good on an error, an empty page, a page reporting no more data,
//! or after the first page in single-page mode.

mod iter;
mod types;

pub use iter::{IterState, ListIter};
pub use types::{FetchFn, ListMeta, Page, PageSource};

#[cfg(test)]
mod tests;
