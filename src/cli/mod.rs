//! CLI module
//!
//! Command-line interface over the charges and refunds APIs.
//!
//! # Commands
//!
//! - `charges list|get|capture|refund` - Work with charges
//! - `refunds list|get` - Work with the refunds of a charge

mod commands;
mod runner;

pub use commands::{ChargeCommand, Cli, Commands, OutputFormat, RefundCommand};
pub use runner::Runner;
