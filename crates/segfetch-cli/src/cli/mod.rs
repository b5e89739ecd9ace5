//! CLI for the segfetch media fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use segfetch_core::config;
use std::path::PathBuf;

use commands::{run_fetch, run_plan};

/// Top-level CLI for segfetch.
#[derive(Debug, Parser)]
#[command(name = "segfetch")]
#[command(about = "segfetch: ordered segment and byte-range media fetcher", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a manifest format entry into a single file.
    Fetch {
        /// Path to the format entry JSON ("-" reads stdin).
        format: PathBuf,

        /// Destination file; bytes go to `<output>.part` until the fetch completes.
        #[arg(short, long)]
        output: PathBuf,

        /// Abbreviated run: keep only the configured test_file_size bytes.
        #[arg(long)]
        test: bool,

        /// Attempt the whole fetch up to N times on transient failures.
        #[arg(long, value_name = "N")]
        retries: Option<u32>,
    },

    /// Show the requests a fetch would issue, without touching the network.
    Plan {
        /// Path to the format entry JSON ("-" reads stdin).
        format: PathBuf,

        /// Plan an abbreviated run (see `fetch --test`).
        #[arg(long)]
        test: bool,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                format,
                output,
                test,
                retries,
            } => run_fetch(&cfg, &format, &output, test, retries).await?,
            CliCommand::Plan { format, test } => run_plan(&cfg, &format, test).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
