//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stripe charges and refunds CLI
#[derive(Parser, Debug)]
#[command(name = "stripe-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML); falls back to STRIPE_API_KEY and friends
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with charges
    #[command(subcommand)]
    Charges(ChargeCommand),

    /// Work with refunds
    #[command(subcommand)]
    Refunds(RefundCommand),
}

/// Charge subcommands
#[derive(Subcommand, Debug)]
pub enum ChargeCommand {
    /// List charges
    List {
        /// Page size
        #[arg(long)]
        limit: Option<u32>,

        /// Only charges of this customer
        #[arg(long)]
        customer: Option<String>,

        /// Only charges created after this unix timestamp
        #[arg(long)]
        created_gt: Option<i64>,

        /// Fetch only the first page
        #[arg(long)]
        single: bool,

        /// Stop after this many charges
        #[arg(long)]
        max: Option<usize>,
    },

    /// Retrieve a charge
    Get {
        /// Charge ID
        id: String,
    },

    /// Capture an authorized charge
    Capture {
        /// Charge ID
        id: String,

        /// Capture less than the authorized amount
        #[arg(long)]
        amount: Option<u64>,
    },

    /// Refund a charge
    Refund {
        /// Charge ID
        id: String,

        /// Partial refund amount
        #[arg(long)]
        amount: Option<u64>,
    },
}

/// Refund subcommands
#[derive(Subcommand, Debug)]
pub enum RefundCommand {
    /// List the refunds of a charge
    List {
        /// Charge ID
        #[arg(long)]
        charge: String,

        /// Page size
        #[arg(long)]
        limit: Option<u32>,

        /// Fetch only the first page
        #[arg(long)]
        single: bool,
    },

    /// Retrieve a refund
    Get {
        /// Charge ID
        #[arg(long)]
        charge: String,

        /// Refund ID
        id: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one object per line)
    Json,
    /// Indented JSON
    Pretty,
}
