//! Rate helpers: instruments that reprice against a trial curve.

use ratebook_core::calendars::{BusinessDayConvention, Calendar, CalendarId};
use ratebook_core::daycounts::DayCountConvention;
use ratebook_core::types::{Date, Frequency, Period};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CurveError, CurveResult};
use crate::quotes::RateQuote;
use crate::term_structure::YieldTermStructure;

/// Market conventions of a EURIBOR index and its deposits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EuriborConventions {
    /// Business days between fixing and value date.
    pub fixing_days: i32,
    /// Fixing and settlement calendar.
    pub calendar: CalendarId,
    /// Accrual day count.
    pub day_count: DayCountConvention,
    /// Adjustment of the maturity date.
    pub business_day_convention: BusinessDayConvention,
}

impl Default for EuriborConventions {
    fn default() -> Self {
        Self {
            fixing_days: 2,
            calendar: CalendarId::Target,
            day_count: DayCountConvention::Actual360,
            business_day_convention: BusinessDayConvention::ModifiedFollowing,
        }
    }
}

impl EuriborConventions {
    /// Value date for a fixing made on `fixing_date`.
    pub fn value_date(&self, fixing_date: Date) -> Date {
        self.calendar
            .calendar()
            .advance_business_days(fixing_date, self.fixing_days)
    }

    /// Fixing date for an accrual starting on `value_date`.
    pub fn fixing_date(&self, value_date: Date) -> Date {
        self.calendar
            .calendar()
            .advance_business_days(value_date, -self.fixing_days)
    }

    /// Maturity of a deposit of `tenor` starting on `value_date`.
    pub fn maturity_date(&self, value_date: Date, tenor: Period) -> CurveResult<Date> {
        let unadjusted = value_date.add_period(tenor)?;
        Ok(self
            .calendar
            .calendar()
            .adjust(unadjusted, self.business_day_convention)?)
    }
}

/// Fixed-leg conventions of the par swaps in the strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwapConventions {
    /// Fixed leg payment frequency.
    pub fixed_frequency: Frequency,
    /// Fixed leg accrual day count.
    pub fixed_day_count: DayCountConvention,
    /// Adjustment of fixed leg accrual dates.
    pub fixed_convention: BusinessDayConvention,
}

impl Default for SwapConventions {
    fn default() -> Self {
        Self {
            fixed_frequency: Frequency::Annual,
            fixed_day_count: DayCountConvention::Actual360,
            fixed_convention: BusinessDayConvention::Unadjusted,
        }
    }
}

/// An instrument whose quote the bootstrap must reproduce.
pub trait RateHelper: fmt::Debug + Send + Sync {
    /// Short label such as `DEP 3M`.
    fn label(&self) -> String;

    /// Latest date the instrument depends on; the curve pillar it fixes.
    fn pillar_date(&self) -> Date;

    /// Market quote.
    fn quote(&self) -> f64;

    /// Quote implied by a curve.
    fn implied_quote(&self, curve: &dyn YieldTermStructure) -> f64;
}

/// Deposit with simple Actual/360 interest from the spot date.
#[derive(Debug, Clone)]
pub struct DepositRateHelper {
    quote: RateQuote,
    start: Date,
    end: Date,
    day_count: DayCountConvention,
}

impl DepositRateHelper {
    /// Builds a deposit helper for a curve anchored at `reference_date`.
    pub fn new(
        quote: RateQuote,
        reference_date: Date,
        conventions: &EuriborConventions,
    ) -> CurveResult<Self> {
        validate(&quote)?;
        let start = conventions.value_date(reference_date);
        let end = conventions.maturity_date(start, quote.tenor)?;
        Ok(Self {
            quote,
            start,
            end,
            day_count: conventions.day_count,
        })
    }

    /// Accrual start (spot) date.
    pub fn start_date(&self) -> Date {
        self.start
    }
}

impl RateHelper for DepositRateHelper {
    fn label(&self) -> String {
        format!("DEP {}", self.quote.tenor)
    }

    fn pillar_date(&self) -> Date {
        self.end
    }

    fn quote(&self) -> f64 {
        self.quote.rate
    }

    fn implied_quote(&self, curve: &dyn YieldTermStructure) -> f64 {
        curve.forward_rate(self.start, self.end, self.day_count)
    }
}

/// Par swap: fixed leg against a 3M EURIBOR leg projected on the same curve.
///
/// With forecasting and discounting on one curve the floating leg is worth
/// `DF(start) - DF(end)`, so the par rate is that value over the fixed annuity.
#[derive(Debug, Clone)]
pub struct SwapRateHelper {
    quote: RateQuote,
    start: Date,
    end: Date,
    /// `(accrual fraction, payment date)` of each fixed coupon.
    fixed_leg: Vec<(f64, Date)>,
}

impl SwapRateHelper {
    /// Builds a swap helper for a curve anchored at `reference_date`.
    pub fn new(
        quote: RateQuote,
        reference_date: Date,
        index: &EuriborConventions,
        swap: &SwapConventions,
    ) -> CurveResult<Self> {
        validate(&quote)?;
        let cal = index.calendar.calendar();
        let start = index.value_date(reference_date);
        let end = index.maturity_date(start, quote.tenor)?;

        let unadjusted_end = start.add_period(quote.tenor)?;
        let step = swap.fixed_frequency.months_per_period() as i32;
        let mut accrual_dates = vec![unadjusted_end];
        let mut k = 1;
        loop {
            let d = unadjusted_end.add_months(-step * k)?;
            if d <= start {
                break;
            }
            accrual_dates.push(d);
            k += 1;
        }
        accrual_dates.push(start);
        accrual_dates.reverse();

        let mut fixed_leg = Vec::with_capacity(accrual_dates.len() - 1);
        for pair in accrual_dates.windows(2) {
            let acc_start = cal.adjust(pair[0], swap.fixed_convention)?;
            let acc_end = cal.adjust(pair[1], swap.fixed_convention)?;
            let payment = cal.adjust(pair[1], index.business_day_convention)?;
            fixed_leg.push((swap.fixed_day_count.time(acc_start, acc_end), payment));
        }

        Ok(Self {
            quote,
            start,
            end,
            fixed_leg,
        })
    }

    /// Number of fixed coupons.
    pub fn fixed_coupon_count(&self) -> usize {
        self.fixed_leg.len()
    }
}

impl RateHelper for SwapRateHelper {
    fn label(&self) -> String {
        format!("SWAP {}", self.quote.tenor)
    }

    fn pillar_date(&self) -> Date {
        self.fixed_leg
            .last()
            .map_or(self.end, |&(_, pay)| pay.max(self.end))
    }

    fn quote(&self) -> f64 {
        self.quote.rate
    }

    fn implied_quote(&self, curve: &dyn YieldTermStructure) -> f64 {
        let annuity: f64 = self
            .fixed_leg
            .iter()
            .map(|&(tau, pay)| tau * curve.discount(pay))
            .sum();
        if annuity <= 0.0 {
            return 0.0;
        }
        (curve.discount(self.start) - curve.discount(self.end)) / annuity
    }
}

fn validate(quote: &RateQuote) -> CurveResult<()> {
    if !quote.rate.is_finite() {
        return Err(CurveError::invalid_quote(quote.tenor.to_string(), "rate is not finite"));
    }
    if quote.tenor.length <= 0 {
        return Err(CurveError::invalid_quote(quote.tenor.to_string(), "tenor must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{ForwardInterpolation, PiecewiseForwardCurve};
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn flat_curve(reference: Date, rate: f64) -> PiecewiseForwardCurve {
        let mut c = PiecewiseForwardCurve::new(
            reference,
            DayCountConvention::Actual360,
            ForwardInterpolation::FlatForward,
        );
        c.push_pillar(reference.add_years(40).unwrap(), rate).unwrap();
        c
    }

    #[test]
    fn test_deposit_dates() {
        let conv = EuriborConventions::default();
        // Thursday 2025-02-13: spot is Monday 2025-02-17
        let h = DepositRateHelper::new(RateQuote::new(Period::months(3), 0.025), d(2025, 2, 13), &conv)
            .unwrap();
        assert_eq!(h.start_date(), d(2025, 2, 17));
        assert_eq!(h.pillar_date(), d(2025, 5, 19));
        assert_eq!(h.label(), "DEP 3M");
    }

    #[test]
    fn test_deposit_implied_on_flat_curve() {
        let conv = EuriborConventions::default();
        let reference = d(2025, 2, 13);
        let h = DepositRateHelper::new(RateQuote::new(Period::months(6), 0.025), reference, &conv)
            .unwrap();
        let curve = flat_curve(reference, 0.03);
        let tau = DayCountConvention::Actual360.time(h.start_date(), h.pillar_date());
        let expected = ((0.03 * tau).exp() - 1.0) / tau;
        assert_relative_eq!(h.implied_quote(&curve), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_swap_fixed_leg_is_annual() {
        let h = SwapRateHelper::new(
            RateQuote::new(Period::years(5), 0.02),
            d(2025, 2, 13),
            &EuriborConventions::default(),
            &SwapConventions::default(),
        )
        .unwrap();
        assert_eq!(h.fixed_coupon_count(), 5);
        assert_eq!(h.pillar_date(), d(2030, 2, 18));
    }

    #[test]
    fn test_rejects_bad_quote() {
        let err = DepositRateHelper::new(
            RateQuote::new(Period::months(0), 0.02),
            d(2025, 2, 13),
            &EuriborConventions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CurveError::InvalidQuote { .. }));
    }
}
