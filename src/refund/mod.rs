//! Refunds resource (`/charges/{charge}/refunds`)
//!
//! Refunds are nested under the charge they return money from, so every
//! operation needs the charge ID in its params.

mod client;
mod types;

pub use client::{Client, RefundIter};
pub use types::{Refund, RefundList, RefundListParams, RefundParams};
