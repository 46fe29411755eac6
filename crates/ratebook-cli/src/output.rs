//! Output formatting utilities.

use colored::Colorize;
use ratebook_bonds::pipeline::{BatchReport, FloatingNoteReport, PricedBond};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Header of the bond price report.
pub fn price_header() -> String {
    format!(
        "{:<10} | {:<10} | {:<10} | {:>10} | {:<10}",
        "Country", "Issue", "Maturity", "Price", "Bond"
    )
}

/// One line of the bond price report.
pub fn price_line(p: &PricedBond) -> String {
    format!(
        "{:<10} | {:<10} | {:<10} | {:10.2} | {:<10}",
        p.country,
        p.issue_date.to_string(),
        p.maturity_date.to_string(),
        p.clean_price,
        p.name
    )
}

/// Prints a batch as the pipe-separated console report.
pub fn print_batch(title: &str, report: &BatchReport) {
    println!("\n{}", title.bold());
    println!("{}", price_header());
    for row in &report.rows {
        match &row.result {
            Ok(priced) => println!("{}", price_line(priced)),
            Err(e) => println!(
                "{}",
                format!("Error processing bond at row {}: {e}", row.row).red()
            ),
        }
    }
}

/// Serializable view of one batch row.
#[derive(Debug, Clone, Serialize)]
pub struct RowView {
    pub row: usize,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priced: Option<PricedBond>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Serializable view of a batch.
pub fn batch_view(report: &BatchReport) -> Vec<RowView> {
    report
        .rows
        .iter()
        .map(|r| RowView {
            row: r.row,
            name: r.name.clone(),
            priced: r.result.as_ref().ok().cloned(),
            error: r.result.as_ref().err().map(ToString::to_string),
        })
        .collect()
}

/// Cash-flow breakdown row.
#[derive(Debug, Clone, Tabled)]
struct CashFlowRow {
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Fixing")]
    fixing: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Discount Factor")]
    discount_factor: String,
    #[tabled(rename = "Present Value")]
    present_value: String,
}

/// Prints the floating-rate note report.
pub fn print_floating(report: &FloatingNoteReport) {
    for date in &report.required_fixings {
        println!("Fixing needed for: {date}");
    }
    if let Some((date, rate)) = report.registered_fixing {
        println!("Registered fixing: {date} = {:.4}%", rate * 100.0);
    }

    print_header("EURIBOR zero curve (continuous, Actual/360)");
    for (i, point) in report.zero_curve.iter().enumerate() {
        if !is_summary_month(i + 1) {
            continue;
        }
        println!("  {}  {:>6.2}y  {:.4}%", point.date, point.time, point.rate * 100.0);
    }

    let v = &report.valuation;
    print_header("Floating rate bond");
    println!("Net Present Value (NPV) of the floating rate bond: {:.2}", v.npv);
    print_divider();
    println!("Clean floating rate bond price is: {:.2}", v.clean_price);
    println!("Dirty floating rate bond price is: {:.2}", v.dirty_price);
    print_divider();

    let rows: Vec<CashFlowRow> = v
        .cash_flows
        .iter()
        .map(|cf| CashFlowRow {
            kind: cf.kind.to_string(),
            date: cf.date.to_string(),
            fixing: cf.fixing_date.map(|d| d.to_string()).unwrap_or_default(),
            amount: format!("{:.2}", cf.amount),
            discount_factor: format!("{:.6}", cf.discount_factor),
            present_value: format!("{:.2}", cf.present_value),
        })
        .collect();
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(3..)).with(Alignment::right()))
        .to_string();
    println!("{table}");
}

/// 1M, 1Y and every fifth year of a monthly sample.
fn is_summary_month(month: usize) -> bool {
    month == 1 || month == 12 || month % 60 == 0
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints a success message.
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Prints a divider line.
pub fn print_divider() {
    println!("{}", "-".repeat(40).dimmed());
}

/// Writes zero-rate samples as CSV.
pub fn write_zero_curve(
    path: &std::path::Path,
    points: &[ratebook_curves::ZeroRatePoint],
) -> crate::error::CliResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["date", "time", "zero_rate"])?;
    for p in points {
        writer.write_record([p.date.to_string(), format!("{:.6}", p.time), format!("{:.8}", p.rate)])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratebook_core::types::Date;

    #[test]
    fn test_price_line_layout() {
        let p = PricedBond {
            country: "UK".into(),
            name: "UK 10y Gilt".into(),
            issue_date: Date::from_ymd(2024, 6, 15).unwrap(),
            maturity_date: Date::from_ymd(2034, 6, 15).unwrap(),
            settlement_date: Date::from_ymd(2025, 6, 17).unwrap(),
            clean_price: 99.996,
            dirty_price: 100.0,
            accrued_amount: 0.0,
        };
        assert_eq!(
            price_line(&p),
            "UK         | 2024-06-15 | 2034-06-15 |     100.00 | UK 10y Gilt"
        );
        assert_eq!(
            price_header(),
            "Country    | Issue      | Maturity   |      Price | Bond      "
        );
    }

    #[test]
    fn test_summary_months() {
        let months: Vec<usize> = (1..=360).filter(|m| is_summary_month(*m)).collect();
        assert_eq!(months, [1, 12, 60, 120, 180, 240, 300, 360]);
    }
}
