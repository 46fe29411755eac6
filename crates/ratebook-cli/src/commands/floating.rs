//! Floating command: bootstraps the EURIBOR curve and values the FRN.

use anyhow::{Context, Result};
use clap::Args;
use ratebook_bonds::pipeline::price_floating_note;
use ratebook_core::types::Date;
use ratebook_curves::ForwardInterpolation;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::commands::valuation_date;
use crate::config::FloatingConfig;
use crate::output;

/// Arguments for the floating command.
#[derive(Args, Debug)]
pub struct FloatingArgs {
    /// Valuation date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub valuation_date: Option<Date>,

    /// Note maturity, overriding the configured tenor
    #[arg(long)]
    pub maturity: Option<Date>,

    /// Face value
    #[arg(long)]
    pub face_value: Option<f64>,

    /// Forward interpolation (linear-forward or flat-forward)
    #[arg(long)]
    pub interpolation: Option<ForwardInterpolation>,

    /// Write the monthly zero-rate curve to this CSV file
    #[arg(long)]
    pub curve_out: Option<PathBuf>,
}

/// Execute the floating command.
pub fn execute(args: FloatingArgs, config: &FloatingConfig, format: OutputFormat) -> Result<()> {
    let mut request = config.request(valuation_date(args.valuation_date));
    if let Some(maturity) = args.maturity {
        request.maturity_date = Some(maturity);
    }
    if let Some(face_value) = args.face_value {
        request.face_value = face_value;
    }
    if let Some(interpolation) = args.interpolation {
        request.interpolation = interpolation;
    }

    let report = price_floating_note(&request).context("pricing floating rate note")?;

    match format {
        OutputFormat::Text => output::print_floating(&report),
        OutputFormat::Json => output::print_json(&report)?,
    }

    if let Some(path) = &args.curve_out {
        output::write_zero_curve(path, &report.zero_curve)
            .with_context(|| format!("writing {}", path.display()))?;
        output::print_success(&format!(
            "{} zero rates written to {}",
            report.zero_curve.len(),
            path.display()
        ));
    }
    Ok(())
}
