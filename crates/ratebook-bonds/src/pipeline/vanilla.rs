//! Fixed-rate government bond tables priced from yields.

use ratebook_core::types::Date;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::builder::{to_f64, InstrumentBuilder};
use crate::conventions::ConventionTable;
use crate::error::{BondError, BondResult};
use crate::instruments::Bond as _;
use crate::pricing::YieldPricer;
use crate::record::{BondRecord, BondSpec};
use crate::term::TermParser;

/// A successfully priced row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedBond {
    /// Resolved country.
    pub country: String,
    /// Bond name as given.
    pub name: String,
    /// Issue date the schedule starts from, before adjustment.
    pub issue_date: Date,
    /// Maturity date as given.
    pub maturity_date: Date,
    /// Settlement date of the valuation.
    pub settlement_date: Date,
    /// Clean price per 100 face.
    pub clean_price: f64,
    /// Dirty price per 100 face.
    pub dirty_price: f64,
    /// Accrued interest in currency.
    pub accrued_amount: f64,
}

/// The outcome of one row of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct RowOutcome {
    /// 1-based data row number.
    pub row: usize,
    /// Bond name as given.
    pub name: String,
    /// Price or the error that stopped the row.
    pub result: BondResult<PricedBond>,
}

/// Per-row results of a batch, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// One outcome per input row.
    pub rows: Vec<RowOutcome>,
}

impl BatchReport {
    /// Successfully priced rows.
    pub fn priced(&self) -> impl Iterator<Item = &PricedBond> {
        self.rows.iter().filter_map(|r| r.result.as_ref().ok())
    }

    /// Failed rows with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &BondError)> {
        self.rows
            .iter()
            .filter_map(|r| r.result.as_ref().err().map(|e| (r.row, e)))
    }

    /// Clean price per row, `None` for failed rows.
    pub fn clean_prices(&self) -> Vec<Option<f64>> {
        self.rows
            .iter()
            .map(|r| r.result.as_ref().ok().map(|p| p.clean_price))
            .collect()
    }

    /// Number of rows that failed.
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}

/// Prices bond rows independently against an ordered convention table.
#[derive(Debug, Clone, Default)]
pub struct VanillaPipeline {
    table: ConventionTable,
    builder: InstrumentBuilder,
}

impl VanillaPipeline {
    /// Creates a pipeline.
    pub fn new(table: ConventionTable, term_parser: TermParser) -> Self {
        Self {
            table,
            builder: InstrumentBuilder::new(term_parser),
        }
    }

    /// Convention table in use.
    pub fn table(&self) -> &ConventionTable {
        &self.table
    }

    /// Instrument builder in use.
    pub fn builder(&self) -> &InstrumentBuilder {
        &self.builder
    }

    /// Resolves, builds and prices one row.
    pub fn price_record(
        &self,
        record: &BondRecord,
        valuation_date: Date,
        issue_override: Option<Date>,
    ) -> BondResult<PricedBond> {
        let spec = BondSpec::from_record(record)?;
        let convention = self.table.resolve(&spec.name)?;
        let bond = self
            .builder
            .fixed_rate_bond(&spec, convention, issue_override)?;
        let yield_rate = to_f64("Yield", spec.market_yield_percent)? / 100.0;
        let price = YieldPricer::for_convention(convention).price(&bond, yield_rate, valuation_date)?;

        Ok(PricedBond {
            country: convention.country.clone(),
            name: spec.name,
            issue_date: bond.schedule().unadjusted_dates()[0],
            maturity_date: spec.maturity_date,
            settlement_date: price.settlement_date,
            clean_price: price.clean_price,
            dirty_price: price.dirty_price,
            accrued_amount: price.accrued_amount,
        })
    }

    /// Prices every row; failures are logged and recorded, never propagated.
    pub fn run(
        &self,
        records: &[BondRecord],
        valuation_date: Date,
        issue_override: Option<Date>,
    ) -> BatchReport {
        let rows = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let row = i + 1;
                let result = self.price_record(record, valuation_date, issue_override);
                match &result {
                    Ok(p) => debug!(row, bond = %p.name, price = p.clean_price, "priced bond"),
                    Err(error) => warn!(row, bond = %record.name, %error, "row failed"),
                }
                RowOutcome {
                    row,
                    name: record.name.trim().to_string(),
                    result,
                }
            })
            .collect();
        BatchReport { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_row_isolation() {
        let records = vec![
            BondRecord::new("UK 10y Gilt", "2034-06-15", "4.25", "1000", "4.25"),
            BondRecord::new("US 5Y Note", "2030-05-31", "4.0", "1000", "4.1"),
            BondRecord::new("Brazil 10Y", "2034-01-01", "10", "1000", "11"),
            BondRecord::new("Germany 10Y Bund", "2035-02-15", "2.5", "1000", "2.6"),
        ];
        let report = VanillaPipeline::default().run(&records, d(2025, 6, 13), None);

        assert_eq!(report.rows.len(), 4);
        assert_eq!(report.failure_count(), 1);
        let (row, error) = report.failures().next().unwrap();
        assert_eq!(row, 3);
        assert!(matches!(error, BondError::UnresolvedCountry { .. }));
        let prices = report.clean_prices();
        assert!(prices[0].is_some() && prices[1].is_some() && prices[3].is_some());
        assert!(prices[2].is_none());
    }

    #[test]
    fn test_override_is_used_verbatim() {
        let record = BondRecord::new("UK 10y Gilt", "2034-06-15", "4.25", "1000", "4.25");
        let issue = d(2025, 6, 13);
        let priced = VanillaPipeline::default()
            .price_record(&record, issue, Some(issue))
            .unwrap();
        assert_eq!(priced.issue_date, issue);
        assert_eq!(priced.country, "UK");
    }

    #[test]
    fn test_term_errors_are_row_errors() {
        let record = BondRecord::new("Italy BTP", "2034-06-15", "3.5", "1000", "3.6");
        let err = VanillaPipeline::default()
            .price_record(&record, d(2025, 6, 13), None)
            .unwrap_err();
        assert!(matches!(err, BondError::InvalidTermFormat { .. }));
    }
}
