//! Charges resource (`/charges`)
//!
//! Create, retrieve, update, capture, refund and list charges.
//!
//! ```rust,ignore
//! use stripe_client::charge::{CardParams, ChargeParams};
//! use stripe_client::Currency;
//!
//! let params = ChargeParams::new(1000, Currency::USD)
//!     .card(CardParams::new("4242424242424242", "06", "2030"))
//!     .description("order #6735");
//! let charge = client.charges().create(&params).await?;
//! ```

mod client;
mod types;

pub use client::{ChargeIter, Client};
pub use types::{CaptureParams, Card, CardParams, Charge, ChargeList, ChargeListParams, ChargeParams};
