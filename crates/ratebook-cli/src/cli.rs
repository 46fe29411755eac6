//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::{FloatingArgs, VanillaArgs};

/// Ratebook - government bond and EURIBOR floating-rate note pricer
#[derive(Parser)]
#[command(name = "ratebook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true, env = "RATEBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Log pipeline stages to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Price a table of fixed-rate government bonds from yields
    Vanilla(VanillaArgs),

    /// Bootstrap the EURIBOR curve and value a floating-rate note on it
    Floating(FloatingArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Console report
    #[default]
    Text,
    /// JSON document
    Json,
}
