//! CLI runner - executes commands

use crate::charge::{CaptureParams, ChargeListParams};
use crate::cli::commands::{ChargeCommand, Cli, Commands, OutputFormat, RefundCommand};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::params::ListParams;
use crate::refund::{RefundListParams, RefundParams};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing results to stdout
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let client = Client::new(&config)?;
        self.execute(&client, &mut std::io::stdout()).await
    }

    /// Run the CLI command against `client`, writing results to `out`
    pub async fn execute<W: Write>(&self, client: &Client, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Commands::Charges(cmd) => self.charges(client, cmd, out).await,
            Commands::Refunds(cmd) => self.refunds(client, cmd, out).await,
        }
    }

    /// Load configuration from `--config` or the environment
    fn load_config(&self) -> Result<ClientConfig> {
        match &self.cli.config {
            Some(path) => {
                debug!(path = %path.display(), "Loading config file");
                ClientConfig::from_file(path)
            }
            None => ClientConfig::from_env(),
        }
    }

    async fn charges<W: Write>(
        &self,
        client: &Client,
        cmd: &ChargeCommand,
        out: &mut W,
    ) -> Result<()> {
        let charges = client.charges();
        match cmd {
            ChargeCommand::List {
                limit,
                customer,
                created_gt,
                single,
                max,
            } => {
                let mut list = ListParams::new();
                list.limit = *limit;
                list.single = *single;
                if let Some(ts) = created_gt {
                    list.filters.add_filter("created", "gt", ts.to_string());
                }
                let params = ChargeListParams {
                    list,
                    customer: customer.clone(),
                    ..Default::default()
                };

                let mut iter = charges.list(&params);
                let mut count = 0usize;
                while max.map_or(true, |m| count < m) {
                    let Some(charge) = iter.advance().await? else {
                        break;
                    };
                    self.emit(out, &charge)?;
                    count += 1;
                }
                info!(count, pages = iter.fetch_count(), "Listed charges");
                Ok(())
            }
            ChargeCommand::Get { id } => {
                let charge = charges.get(id, None).await?;
                self.emit(out, &charge)
            }
            ChargeCommand::Capture { id, amount } => {
                let params = CaptureParams {
                    amount: *amount,
                    ..Default::default()
                };
                let charge = charges.capture(id, Some(&params)).await?;
                self.emit(out, &charge)
            }
            ChargeCommand::Refund { id, amount } => {
                let params = RefundParams {
                    amount: *amount,
                    ..RefundParams::new(id.clone())
                };
                let refund = charges.refund(&params).await?;
                self.emit(out, &refund)
            }
        }
    }

    async fn refunds<W: Write>(
        &self,
        client: &Client,
        cmd: &RefundCommand,
        out: &mut W,
    ) -> Result<()> {
        let refunds = client.refunds();
        match cmd {
            RefundCommand::List {
                charge,
                limit,
                single,
            } => {
                let mut params = RefundListParams::new(charge.clone());
                params.list.limit = *limit;
                params.list.single = *single;

                let mut iter = refunds.list(&params)?;
                while let Some(refund) = iter.advance().await? {
                    self.emit(out, &refund)?;
                }
                Ok(())
            }
            RefundCommand::Get { charge, id } => {
                let refund = refunds.get(id, &RefundParams::new(charge.clone())).await?;
                self.emit(out, &refund)
            }
        }
    }

    /// Write one value in the selected output format
    fn emit<W: Write, T: Serialize>(&self, out: &mut W, value: &T) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => serde_json::to_writer(&mut *out, value)?,
            OutputFormat::Pretty => serde_json::to_writer_pretty(&mut *out, value)?,
        }
        writeln!(out)?;
        Ok(())
    }
}
