//! Request parameter encoding
//!
//! Every request body sent to the API is an ordered, form-encoded key/value
//! multimap. Parameter structs describe themselves into a [`FormBody`] through
//! the [`AppendTo`] trait.
//!
//! # Overview
//!
//! - [`FormBody`]: ordered multimap, encoded as `application/x-www-form-urlencoded`
//! - [`Filters`]: ordered `(key, op, value)` triples, e.g. `created[gt]=1400000000`
//! - [`ListParams`]: filters plus list options and the single-page flag
//! - [`Params`]: metadata and expansion options common to all requests

mod form;
mod types;

pub use form::FormBody;
pub use types::{path_segment, AppendTo, Filter, Filters, ListParams, Params, OFFSET_KEY};
