//! Parameter types and the encoding trait

use super::form::FormBody;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use url::Url;

/// Filter key advanced by the list iterator after every page
pub const OFFSET_KEY: &str = "offset";

/// Types that encode themselves into a request body
pub trait AppendTo {
    /// Append this value's pairs to `body`
    fn append_to(&self, body: &mut FormBody);

    /// Encode into a fresh body
    fn to_form(&self) -> FormBody {
        let mut body = FormBody::new();
        self.append_to(&mut body);
        body
    }
}

impl<T: AppendTo> AppendTo for Option<T> {
    fn append_to(&self, body: &mut FormBody) {
        if let Some(inner) = self {
            inner.append_to(body);
        }
    }
}

impl<T: AppendTo + ?Sized> AppendTo for &T {
    fn append_to(&self, body: &mut FormBody) {
        (**self).append_to(body);
    }
}

/// Encode a required identifier for use as a URL path segment
pub fn path_segment(value: &str, param: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::missing_param(param));
    }
    let mut url = Url::parse("http://localhost/")?;
    url.path_segments_mut()
        .map_err(|()| Error::Other(format!("cannot encode {param} as a path segment")))?
        .clear()
        .push(value);

    let segment = url.path().trim_start_matches('/');
    if segment.is_empty() {
        return Err(Error::Other(format!("invalid {param}: {value:?}")));
    }
    Ok(segment.to_string())
}

// ============================================================================
// Filters
// ============================================================================

/// A single `(key, op, value)` filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub key: String,
    pub op: String,
    pub value: String,
}

impl Filter {
    /// Wire key: `key` when `op` is empty, otherwise `key[op]`
    pub fn encoded_key(&self) -> String {
        if self.op.is_empty() {
            self.key.clone()
        } else {
            format!("{}[{}]", self.key, self.op)
        }
    }
}

/// Ordered list of list filters
///
/// Order is preserved and keys may repeat, since some filters
/// (e.g. `include[]`) are cumulative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    filters: Vec<Filter>,
}

impl Filters {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter; pass an empty `op` for a plain equality filter
    pub fn add_filter(
        &mut self,
        key: impl Into<String>,
        op: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.filters.push(Filter {
            key: key.into(),
            op: op.into(),
            value: value.into(),
        });
    }

    /// Builder form of [`Filters::add_filter`]
    #[must_use]
    pub fn with(
        mut self,
        key: impl Into<String>,
        op: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.add_filter(key, op, value);
        self
    }

    /// First filter matching `key` and `op`
    pub fn get(&self, key: &str, op: &str) -> Option<&Filter> {
        self.filters.iter().find(|f| f.key == key && f.op == op)
    }

    /// Current value of the offset filter, if set and numeric
    pub fn offset(&self) -> Option<u64> {
        self.get(OFFSET_KEY, "")
            .and_then(|f| f.value.parse::<u64>().ok())
    }

    /// Advance the offset filter by `count`, inserting it when absent.
    ///
    /// A non-numeric offset value is treated as zero.
    pub fn advance_offset(&mut self, count: u64) {
        match self
            .filters
            .iter_mut()
            .find(|f| f.key == OFFSET_KEY && f.op.is_empty())
        {
            Some(filter) => {
                let current = filter.value.parse::<u64>().unwrap_or(0);
                filter.value = current.saturating_add(count).to_string();
            }
            None => self.add_filter(OFFSET_KEY, "", count.to_string()),
        }
    }

    /// Number of filters
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether no filters are set
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Filters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }
}

impl AppendTo for Filters {
    fn append_to(&self, body: &mut FormBody) {
        for filter in &self.filters {
            body.add(filter.encoded_key(), filter.value.clone());
        }
    }
}

// ============================================================================
// Common Params
// ============================================================================

/// Options accepted by every request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    /// Key/value metadata, encoded as `metadata[key]=value`
    pub metadata: BTreeMap<String, String>,
    /// Fields to expand, encoded as repeated `expand[]=field`
    pub expand: Vec<String>,
}

impl Params {
    /// Create empty params
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a metadata entry
    #[must_use]
    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Request expansion of a field
    #[must_use]
    pub fn expand(mut self, field: impl Into<String>) -> Self {
        self.expand.push(field.into());
        self
    }
}

impl AppendTo for Params {
    fn append_to(&self, body: &mut FormBody) {
        for (key, value) in &self.metadata {
            body.add(format!("metadata[{key}]"), value.clone());
        }
        for field in &self.expand {
            body.add("expand[]", field.clone());
        }
    }
}

// ============================================================================
// List Params
// ============================================================================

/// Parameters shared by every list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Filters; the iterator advances its offset filter
    pub filters: Filters,
    /// Maximum number of items per page
    pub limit: Option<u32>,
    /// Cursor: return items after this object ID
    pub starting_after: Option<String>,
    /// Cursor: return items before this object ID
    pub ending_before: Option<String>,
    /// Fetch only the first page
    pub single: bool,
}

impl ListParams {
    /// Create default list params (multi-page)
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict iteration to the first page
    #[must_use]
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Add a filter
    #[must_use]
    pub fn filter(
        mut self,
        key: impl Into<String>,
        op: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.filters.add_filter(key, op, value);
        self
    }
}

impl AppendTo for ListParams {
    fn append_to(&self, body: &mut FormBody) {
        self.filters.append_to(body);
        body.add_opt("limit", self.limit);
        body.add_opt("starting_after", self.starting_after.as_deref());
        body.add_opt("ending_before", self.ending_before.as_deref());
    }
}
