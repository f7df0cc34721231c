// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Stripe Client
//!
//! A typed client for the Stripe charges and refunds APIs, built around a
//! lazily paginated list iterator.
//!
//! ## Features
//!
//! - **Charges**: create, retrieve, update, capture, refund and list
//! - **Refunds**: create, retrieve, update and list the refunds of a charge
//! - **Lazy pagination**: pages are fetched one at a time as the iterator advances
//! - **Pluggable transport**: any [`http::Backend`] can stand in for HTTP
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stripe_client::{Client, ClientConfig, Result};
//! use stripe_client::charge::{ChargeListParams, ChargeParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new(&ClientConfig::from_env()?)?;
//!
//!     let params = ChargeParams::new(1000, stripe_client::Currency::USD).token("tok_visa");
//!     let charge = client.charges().create(&params).await?;
//!
//!     let mut charges = client.charges().list(&ChargeListParams::new());
//!     while let Some(charge) = charges.advance().await? {
//!         println!("{} {}", charge.id, charge.amount);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                 Client (charges / refunds)                │
//! └───────────────────────────────────────────────────────────┘
//!          │                   │                     │
//! ┌────────┴───────┐  ┌────────┴────────┐  ┌─────────┴────────┐
//! │     Params     │  │   Pagination    │  │      HTTP        │
//! ├────────────────┤  ├─────────────────┤  ├──────────────────┤
//! │ FormBody       │  │ ListIter        │  │ Backend trait    │
//! │ Filters        │  │ PageSource      │  │ HttpBackend      │
//! │ ListParams     │  │ ListMeta        │  │ BackendPages     │
//! └────────────────┘  └─────────────────┘  └──────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Request parameters and form encoding
pub mod params;

/// Lazy list iteration
pub mod pagination;

/// Transport backends
pub mod http;

/// Client configuration
pub mod config;

/// Charges API
pub mod charge;

/// Refunds API
pub mod refund;

/// Top-level client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use client::Client;
pub use config::ClientConfig;
pub use pagination::{IterState, ListIter, ListMeta, Page, PageSource};
pub use params::{Filters, FormBody, ListParams, Params};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
