//! Yield-to-price conversion.

use ratebook_core::daycounts::DayCountConvention;
use ratebook_core::types::{Date, Frequency};
use serde::{Deserialize, Serialize};

use super::checked_settlement;
use crate::cashflows::{self, CashFlow};
use crate::conventions::MarketConvention;
use crate::error::{BondError, BondResult};
use crate::instruments::Bond;

/// Prices from a yield compounded at a fixed frequency.
///
/// Discounting is stepwise: each flow is discounted from the previous one
/// over a year fraction measured on the coupon's own reference period, so
/// irregular and partially elapsed periods are timed consistently with
/// accrual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YieldPricer {
    day_count: DayCountConvention,
    frequency: Frequency,
}

/// Result of a yield pricing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldPrice {
    /// Settlement date the prices refer to.
    pub settlement_date: Date,
    /// Dirty price per 100 face.
    pub dirty_price: f64,
    /// Clean price per 100 face.
    pub clean_price: f64,
    /// Accrued interest in currency.
    pub accrued_amount: f64,
}

impl YieldPricer {
    /// Creates a pricer.
    pub fn new(day_count: DayCountConvention, frequency: Frequency) -> Self {
        Self {
            day_count,
            frequency,
        }
    }

    /// Pricer on a market convention's day count and frequency.
    pub fn for_convention(convention: &MarketConvention) -> Self {
        Self::new(convention.day_count, convention.frequency)
    }

    /// Prices `bond` on `valuation_date` at `yield_rate` (decimal).
    pub fn price(
        &self,
        bond: &dyn Bond,
        yield_rate: f64,
        valuation_date: Date,
    ) -> BondResult<YieldPrice> {
        if !yield_rate.is_finite() || yield_rate <= -self.periods_per_year() {
            return Err(BondError::invalid_field(
                "Yield",
                yield_rate.to_string(),
                "outside the compounding domain",
            ));
        }
        let settlement_date = checked_settlement(bond, valuation_date)?;
        let flows = bond.cash_flows(valuation_date)?;
        let face = bond.face_value();

        let dirty_amount = self.dirty_amount(&flows, yield_rate, settlement_date);
        let accrued_amount = cashflows::accrued_amount(&flows, settlement_date);

        Ok(YieldPrice {
            settlement_date,
            dirty_price: dirty_amount * 100.0 / face,
            clean_price: (dirty_amount - accrued_amount) * 100.0 / face,
            accrued_amount,
        })
    }

    /// Clean price per 100 face.
    pub fn clean_price(
        &self,
        bond: &dyn Bond,
        yield_rate: f64,
        valuation_date: Date,
    ) -> BondResult<f64> {
        Ok(self.price(bond, yield_rate, valuation_date)?.clean_price)
    }

    /// Present value at `settlement` of the flows paid after it.
    pub fn dirty_amount(&self, flows: &[CashFlow], yield_rate: f64, settlement: Date) -> f64 {
        let f = self.periods_per_year();
        let mut last = settlement;
        let mut discount = 1.0;
        let mut total = 0.0;

        for cf in flows.iter().filter(|cf| cf.date > settlement) {
            let t = match cf.accrual {
                Some(a) if last != a.start => {
                    let to_pay = self.time(a.start, cf.date, a.reference_start, a.reference_end);
                    let to_last = self.time(a.start, last, a.reference_start, a.reference_end);
                    to_pay - to_last
                }
                Some(a) => self.time(last, cf.date, a.reference_start, a.reference_end),
                None => self.time(last, cf.date, last, cf.date),
            };
            discount *= (1.0 + yield_rate / f).powf(-f * t);
            total += cf.amount * discount;
            last = cf.date;
        }
        total
    }

    fn time(&self, start: Date, end: Date, reference_start: Date, reference_end: Date) -> f64 {
        if start == end {
            return 0.0;
        }
        self.day_count
            .time_in_period(start, end, reference_start, reference_end)
    }

    fn periods_per_year(&self) -> f64 {
        f64::from(self.frequency.periods_per_year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::FixedRateBond;
    use crate::schedule::{Schedule, ScheduleConfig};
    use approx::assert_relative_eq;
    use ratebook_core::calendars::CalendarId;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn bond(issue: Date, maturity: Date, coupon: f64) -> FixedRateBond {
        let config = ScheduleConfig::new(issue, maturity, Frequency::SemiAnnual)
            .with_calendar(CalendarId::UnitedKingdom);
        FixedRateBond::new(
            Schedule::generate(config).unwrap(),
            1000.0,
            coupon,
            DayCountConvention::ActualActualIsma,
            2,
        )
        .unwrap()
    }

    fn pricer() -> YieldPricer {
        YieldPricer::new(DayCountConvention::ActualActualIsma, Frequency::SemiAnnual)
    }

    #[test]
    fn test_par_on_coupon_date() {
        // Settles on the issue date, which is a business day
        let b = bond(d(2024, 3, 15), d(2029, 3, 15), 0.05);
        let p = pricer().price(&b, 0.05, d(2024, 3, 13)).unwrap();
        assert_eq!(p.settlement_date, d(2024, 3, 15));
        assert_eq!(p.accrued_amount, 0.0);
        assert_relative_eq!(p.clean_price, 100.0, epsilon = 0.02);
    }

    #[test]
    fn test_price_yield_relationship() {
        let b = bond(d(2024, 6, 15), d(2034, 6, 15), 0.0425);
        let valuation = d(2025, 6, 13);
        let at_par = pricer().clean_price(&b, 0.0425, valuation).unwrap();
        let higher = pricer().clean_price(&b, 0.05, valuation).unwrap();
        let lower = pricer().clean_price(&b, 0.035, valuation).unwrap();
        assert!(higher < at_par && at_par < lower);
        assert!((at_par - 100.0).abs() < 0.05);
    }

    #[test]
    fn test_clean_excludes_accrued() {
        let b = bond(d(2024, 6, 15), d(2034, 6, 15), 0.0425);
        let p = pricer().price(&b, 0.0425, d(2024, 9, 12)).unwrap();
        assert!(p.accrued_amount > 0.0);
        assert_relative_eq!(
            p.dirty_price - p.clean_price,
            p.accrued_amount * 100.0 / 1000.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_settlement_after_maturity() {
        let b = bond(d(2024, 6, 15), d(2026, 6, 15), 0.04);
        let err = pricer().price(&b, 0.04, d(2026, 6, 12)).unwrap_err();
        assert!(matches!(err, BondError::SettlementAfterMaturity { .. }));
    }

    #[test]
    fn test_zero_yield_sums_flows() {
        let b = bond(d(2024, 6, 15), d(2026, 6, 15), 0.04);
        let flows = b.cash_flows(d(2024, 6, 13)).unwrap();
        let total: f64 = flows.iter().map(|cf| cf.amount).sum();
        assert_relative_eq!(
            pricer().dirty_amount(&flows, 0.0, d(2024, 6, 14)),
            total,
            epsilon = 1e-9
        );
    }
}
