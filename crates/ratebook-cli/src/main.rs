//! Ratebook CLI - batch pricing of government bond tables and EURIBOR FRNs.
//!
//! # Usage
//!
//! ```bash
//! # Price every row of a bond table and write the prices back
//! ratebook vanilla --input Bonds_list.csv --output Bonds_list-2.csv
//!
//! # Also price each bond as if issued on the valuation date
//! ratebook vanilla --compare-today-issue
//!
//! # Bootstrap the EURIBOR curve and value the floating-rate note
//! ratebook floating --valuation-date 2025-02-13 --curve-out zero_curve.csv
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;
mod table;

use cli::{Cli, Commands};
use config::RatebookConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => RatebookConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => RatebookConfig::default(),
    };

    match cli.command {
        Commands::Vanilla(args) => commands::vanilla::execute(args, &config.vanilla, cli.format)?,
        Commands::Floating(args) => {
            commands::floating::execute(args, &config.floating, cli.format)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(verbose: bool) {
    let default = if verbose { "info,ratebook=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
