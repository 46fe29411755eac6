//! Schedule and instrument construction from parsed bond rows.

use ratebook_core::types::Date;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use crate::conventions::MarketConvention;
use crate::error::{BondError, BondResult};
use crate::index::IborIndex;
use crate::instruments::{FixedRateBond, FloatingCouponTerms, FloatingRateBond};
use crate::record::BondSpec;
use crate::schedule::{Schedule, ScheduleConfig};
use crate::term::TermParser;

/// Builds schedules and bonds. Holds no state beyond its term parser.
#[derive(Debug, Clone, Default)]
pub struct InstrumentBuilder {
    term_parser: TermParser,
}

impl InstrumentBuilder {
    /// Creates a builder using the given term parser.
    pub fn new(term_parser: TermParser) -> Self {
        Self { term_parser }
    }

    /// The term parser in use.
    pub fn term_parser(&self) -> &TermParser {
        &self.term_parser
    }

    /// Issue date: the override when given, else maturity minus the term in the name.
    pub fn issue_date(&self, spec: &BondSpec, issue_override: Option<Date>) -> BondResult<Date> {
        if let Some(issue) = issue_override {
            return Ok(issue);
        }
        let term = self.term_parser.term_years(&spec.name)?;
        let years = i32::try_from(term)
            .map_err(|_| BondError::invalid_field("Bond name", &spec.name, "term too large"))?;
        Ok(spec.maturity_date.add_years(-years)?)
    }

    /// Backward schedule from `maturity` to `issue` on the convention's terms.
    pub fn schedule(
        &self,
        issue: Date,
        maturity: Date,
        convention: &MarketConvention,
    ) -> BondResult<Schedule> {
        let config = ScheduleConfig::new(issue, maturity, convention.frequency)
            .with_calendar(convention.calendar)
            .with_business_day_convention(convention.business_day_convention);
        Schedule::generate(config)
    }

    /// Fixed-rate bond for a parsed row.
    pub fn fixed_rate_bond(
        &self,
        spec: &BondSpec,
        convention: &MarketConvention,
        issue_override: Option<Date>,
    ) -> BondResult<FixedRateBond> {
        let issue = self.issue_date(spec, issue_override)?;
        let schedule = self.schedule(issue, spec.maturity_date, convention)?;
        debug!(
            bond = %spec.name,
            country = %convention.country,
            %issue,
            periods = schedule.len(),
            "built schedule"
        );
        FixedRateBond::new(
            schedule,
            to_f64("FV", spec.face_value)?,
            to_f64("Coupon rate", spec.coupon_rate_percent)? / 100.0,
            convention.day_count,
            convention.settlement_days,
        )
    }

    /// Floating-rate bond on an already generated schedule.
    pub fn floating_rate_bond(
        &self,
        schedule: Schedule,
        face_value: f64,
        index: IborIndex,
        terms: FloatingCouponTerms,
        settlement_days: u32,
    ) -> BondResult<FloatingRateBond> {
        debug!(
            index = index.name(),
            issue = %schedule.start_date(),
            maturity = %schedule.end_date(),
            periods = schedule.len(),
            "building floating rate bond"
        );
        FloatingRateBond::new(schedule, face_value, index, terms, settlement_days)
    }
}

pub(crate) fn to_f64(field: &str, value: Decimal) -> BondResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| BondError::invalid_field(field, value.to_string(), "out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::ConventionTable;
    use crate::instruments::Bond;
    use crate::record::BondRecord;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn spec(name: &str, maturity: &str) -> BondSpec {
        BondSpec::from_record(&BondRecord::new(name, maturity, "4.25", "1000", "4.25")).unwrap()
    }

    #[test]
    fn test_issue_from_term() {
        let builder = InstrumentBuilder::default();
        let issue = builder.issue_date(&spec("UK 10y Gilt", "2034-06-15"), None).unwrap();
        assert_eq!(issue, d(2024, 6, 15));
    }

    #[test]
    fn test_issue_override_is_verbatim() {
        let builder = InstrumentBuilder::default();
        let issue = builder
            .issue_date(&spec("UK 10y Gilt", "2034-06-15"), Some(d(2025, 3, 7)))
            .unwrap();
        assert_eq!(issue, d(2025, 3, 7));
    }

    #[test]
    fn test_missing_term() {
        let builder = InstrumentBuilder::default();
        let err = builder.issue_date(&spec("UK Gilt", "2034-06-15"), None).unwrap_err();
        assert!(matches!(err, BondError::InvalidTermFormat { .. }));
    }

    #[test]
    fn test_fixed_rate_bond_uses_convention() {
        let table = ConventionTable::builtin();
        let convention = table.resolve("Japan 5Y JGB").unwrap();
        let bond = InstrumentBuilder::default()
            .fixed_rate_bond(&spec("Japan 5Y JGB", "2030-03-20"), convention, None)
            .unwrap();
        assert_eq!(bond.issue_date(), d(2025, 3, 20));
        assert_eq!(bond.schedule().len(), 5);
        assert_eq!(bond.settlement_days(), 2);
        assert!((bond.coupon_rate() - 0.0425).abs() < 1e-12);
    }
}
