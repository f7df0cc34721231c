//! HTTP transport module
//!
//! Provides the [`Backend`] seam every resource client calls through, the
//! reqwest-based [`HttpBackend`], and [`BackendPages`], the page source that
//! feeds list endpoints into a [`ListIter`](crate::pagination::ListIter).
//!
//! # Wire conventions
//!
//! - **GET/DELETE**: parameters go in the query string
//! - **POST**: parameters go in an `application/x-www-form-urlencoded` body
//! - **Auth**: the API key is sent as the basic-auth username
//! - **Errors**: non-2xx responses are classified by [`Error::from_response`](crate::Error::from_response)

mod backend;
mod client;
mod list;

pub use backend::{call_json, Backend};
pub use client::{BackendConfig, BackendConfigBuilder, HttpBackend, DEFAULT_BASE_URL};
pub use list::{BackendPages, ListResponse};
