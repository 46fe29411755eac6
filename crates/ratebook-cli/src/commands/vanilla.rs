//! Vanilla command: prices a bond table from yields.

use anyhow::{Context, Result};
use clap::Args;
use ratebook_core::types::Date;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::commands::valuation_date;
use crate::config::VanillaConfig;
use crate::output::{self, RowView};
use crate::table::BondTable;

/// Arguments for the vanilla command.
#[derive(Args, Debug)]
pub struct VanillaArgs {
    /// Input bond table (CSV)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output table with the Bond Price column filled in
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Valuation date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub valuation_date: Option<Date>,

    /// Issue date used for every bond instead of maturity minus term
    #[arg(long)]
    pub issue_date: Option<Date>,

    /// Also price every bond as if issued on the valuation date
    #[arg(long)]
    pub compare_today_issue: bool,
}

#[derive(Serialize)]
struct VanillaJson {
    valuation_date: Date,
    rows: Vec<RowView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    today_issue: Option<Vec<RowView>>,
}

/// Execute the vanilla command.
pub fn execute(args: VanillaArgs, config: &VanillaConfig, format: OutputFormat) -> Result<()> {
    let input = args.input.unwrap_or_else(|| config.input.clone());
    let output_path = args.output.unwrap_or_else(|| config.output.clone());
    let valuation = valuation_date(args.valuation_date);

    let pipeline = config.pipeline()?;
    let table = BondTable::read(&input)
        .with_context(|| format!("reading bond table {}", input.display()))?;
    let records = table.records();
    info!(rows = table.len(), %valuation, input = %input.display(), "loaded bond table");

    let primary = pipeline.run(&records, valuation, args.issue_date);
    let comparison = args
        .compare_today_issue
        .then(|| pipeline.run(&records, valuation, Some(valuation)));

    match format {
        OutputFormat::Text => {
            output::print_batch("Calculations using issue date:", &primary);
            if let Some(report) = &comparison {
                output::print_batch("Calculations using todays date:", report);
            }
        }
        OutputFormat::Json => output::print_json(&VanillaJson {
            valuation_date: valuation,
            rows: output::batch_view(&primary),
            today_issue: comparison.as_ref().map(output::batch_view),
        })?,
    }

    // The saved column always holds the primary pass; the today-issue
    // comparison is report-only and never overwrites it.
    table
        .write_with_prices(&output_path, &primary.clean_prices())
        .with_context(|| format!("writing {}", output_path.display()))?;
    debug!(failures = primary.failure_count(), "batch complete");
    output::print_success(&format!("Prices written to {}", output_path.display()));
    Ok(())
}
