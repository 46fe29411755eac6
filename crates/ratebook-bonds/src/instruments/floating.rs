//! Floating-rate bonds indexed to an IBOR rate.

use ratebook_core::calendars::{BusinessDayConvention, Calendar, CalendarId};
use ratebook_core::daycounts::DayCountConvention;
use ratebook_core::types::Date;
use serde::{Deserialize, Serialize};

use super::Bond;
use crate::cashflows::{Accrual, CashFlow, CashFlowKind};
use crate::error::{BondError, BondResult};
use crate::index::IborIndex;
use crate::schedule::Schedule;

/// Per-period coupon terms of a floating-rate bond.
///
/// Each list applies period by period; a list shorter than the schedule
/// repeats its last value. Empty cap and floor lists mean no bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingCouponTerms {
    /// Multipliers on the index fixing.
    pub gearings: Vec<f64>,
    /// Additive spreads (decimal).
    pub spreads: Vec<f64>,
    /// Upper bounds on the coupon rate.
    pub caps: Vec<f64>,
    /// Lower bounds on the coupon rate.
    pub floors: Vec<f64>,
    /// Fix at the end of the period instead of the start.
    pub in_arrears: bool,
}

impl Default for FloatingCouponTerms {
    fn default() -> Self {
        Self {
            gearings: vec![1.0],
            spreads: vec![0.0],
            caps: Vec::new(),
            floors: Vec::new(),
            in_arrears: false,
        }
    }
}

impl FloatingCouponTerms {
    /// Terms with a single spread over the plain index.
    pub fn with_spread(spread: f64) -> Self {
        Self {
            spreads: vec![spread],
            ..Self::default()
        }
    }

    /// Gearing of period `i`.
    pub fn gearing(&self, i: usize) -> f64 {
        nth_or_last(&self.gearings, i).unwrap_or(1.0)
    }

    /// Spread of period `i`.
    pub fn spread(&self, i: usize) -> f64 {
        nth_or_last(&self.spreads, i).unwrap_or(0.0)
    }

    /// Coupon rate of period `i` for an index fixing.
    pub fn coupon_rate(&self, i: usize, fixing: f64) -> f64 {
        let mut rate = self.gearing(i) * fixing + self.spread(i);
        if let Some(floor) = nth_or_last(&self.floors, i) {
            rate = rate.max(floor);
        }
        if let Some(cap) = nth_or_last(&self.caps, i) {
            rate = rate.min(cap);
        }
        rate
    }

    fn validate(&self) -> BondResult<()> {
        let mut all = self
            .gearings
            .iter()
            .chain(&self.spreads)
            .chain(&self.caps)
            .chain(&self.floors);
        if all.any(|v| !v.is_finite()) {
            return Err(BondError::invalid_spec("coupon terms must be finite"));
        }
        Ok(())
    }
}

fn nth_or_last(values: &[f64], i: usize) -> Option<f64> {
    values.get(i).or_else(|| values.last()).copied()
}

/// A bullet bond paying index-linked coupons.
#[derive(Debug, Clone)]
pub struct FloatingRateBond {
    schedule: Schedule,
    face_value: f64,
    index: IborIndex,
    terms: FloatingCouponTerms,
    day_count: DayCountConvention,
    settlement_days: u32,
    payment_convention: BusinessDayConvention,
}

impl FloatingRateBond {
    /// Creates a bond accruing on Actual/360 with ModifiedFollowing payments.
    pub fn new(
        schedule: Schedule,
        face_value: f64,
        index: IborIndex,
        terms: FloatingCouponTerms,
        settlement_days: u32,
    ) -> BondResult<Self> {
        if face_value <= 0.0 || !face_value.is_finite() {
            return Err(BondError::invalid_spec(format!(
                "face value must be positive, got {face_value}"
            )));
        }
        terms.validate()?;
        Ok(Self {
            schedule,
            face_value,
            index,
            terms,
            day_count: DayCountConvention::Actual360,
            settlement_days,
            payment_convention: BusinessDayConvention::ModifiedFollowing,
        })
    }

    /// Sets the accrual day count.
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the adjustment of payment dates.
    pub fn with_payment_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.payment_convention = convention;
        self
    }

    /// The coupon index.
    pub fn index(&self) -> &IborIndex {
        &self.index
    }

    /// Mutable access to the index, for registering fixings.
    pub fn index_mut(&mut self) -> &mut IborIndex {
        &mut self.index
    }

    /// Coupon terms.
    pub fn terms(&self) -> &FloatingCouponTerms {
        &self.terms
    }

    /// Fixing dates of every coupon, in schedule order.
    pub fn required_fixing_dates(&self) -> Vec<Date> {
        self.schedule
            .periods()
            .iter()
            .map(|p| {
                let anchor = if self.terms.in_arrears { p.end } else { p.start };
                self.index.fixing_date(anchor)
            })
            .collect()
    }

    fn payment_date(&self, accrual_end: Date) -> BondResult<Date> {
        Ok(self
            .schedule
            .config()
            .calendar
            .calendar()
            .adjust(accrual_end, self.payment_convention)?)
    }
}

impl Bond for FloatingRateBond {
    fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    fn face_value(&self) -> f64 {
        self.face_value
    }

    fn settlement_days(&self) -> u32 {
        self.settlement_days
    }

    fn calendar(&self) -> CalendarId {
        self.schedule.config().calendar
    }

    fn cash_flows(&self, valuation_date: Date) -> BondResult<Vec<CashFlow>> {
        let fixing_dates = self.required_fixing_dates();
        let mut flows = Vec::with_capacity(fixing_dates.len() + 1);

        for (i, (period, fixing_date)) in self
            .schedule
            .periods()
            .into_iter()
            .zip(fixing_dates)
            .enumerate()
        {
            let date = self.payment_date(period.end)?;
            if date <= valuation_date {
                continue;
            }
            let fixing = self.index.fixing(fixing_date, valuation_date)?;
            let accrual = Accrual {
                start: period.start,
                end: period.end,
                reference_start: period.start,
                reference_end: period.end,
                rate: self.terms.coupon_rate(i, fixing),
                nominal: self.face_value,
                day_count: self.day_count,
            };
            flows.push(
                CashFlow::coupon(CashFlowKind::FloatingCoupon, date, accrual)
                    .with_fixing_date(fixing_date),
            );
        }

        let redemption_date = self.payment_date(self.schedule.end_date())?;
        if redemption_date > valuation_date {
            flows.push(CashFlow::redemption(redemption_date, self.face_value));
        }
        Ok(flows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ScheduleConfig;
    use approx::assert_relative_eq;
    use ratebook_core::types::Frequency;
    use ratebook_curves::{ForwardInterpolation, PiecewiseForwardCurve, YieldTermStructure};
    use std::sync::Arc;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn flat_index(reference: Date, rate: f64) -> IborIndex {
        let mut curve = PiecewiseForwardCurve::new(
            reference,
            DayCountConvention::Actual360,
            ForwardInterpolation::FlatForward,
        );
        curve.push_pillar(reference.add_days(3650), rate).unwrap();
        let curve: Arc<dyn YieldTermStructure> = Arc::new(curve);
        IborIndex::euribor_3m(curve)
    }

    fn one_year_frn(issue: Date, terms: FloatingCouponTerms) -> FloatingRateBond {
        let config = ScheduleConfig::new(issue, issue.add_years(1).unwrap(), Frequency::Quarterly)
            .with_calendar(CalendarId::Target)
            .with_business_day_convention(BusinessDayConvention::ModifiedFollowing);
        let schedule = Schedule::generate(config).unwrap();
        FloatingRateBond::new(schedule, 1_000_000.0, flat_index(issue, 0.02), terms, 2).unwrap()
    }

    #[test]
    fn test_terms_repeat_last_value() {
        let terms = FloatingCouponTerms {
            gearings: vec![1.0, 2.0],
            spreads: vec![0.01],
            caps: vec![0.05],
            floors: vec![0.0, 0.02],
            in_arrears: false,
        };
        assert_eq!(terms.gearing(5), 2.0);
        assert_relative_eq!(terms.coupon_rate(0, 0.03), 0.04);
        assert_relative_eq!(terms.coupon_rate(1, 0.03), 0.05);
        assert_relative_eq!(terms.coupon_rate(3, -0.01), 0.02);
    }

    #[test]
    fn test_required_fixing_dates() {
        let issue = d(2025, 2, 13);
        let frn = one_year_frn(issue, FloatingCouponTerms::with_spread(0.01));
        let fixings = frn.required_fixing_dates();
        assert_eq!(fixings.len(), 4);
        // Thursday issue fixes on the Tuesday before
        assert_eq!(fixings[0], d(2025, 2, 11));
    }

    #[test]
    fn test_first_coupon_needs_history() {
        let issue = d(2025, 2, 13);
        let mut frn = one_year_frn(issue, FloatingCouponTerms::with_spread(0.01));
        assert!(matches!(
            frn.cash_flows(issue),
            Err(BondError::MissingFixing { .. })
        ));

        frn.index_mut().add_fixing(d(2025, 2, 11), 0.0238);
        let flows = frn.cash_flows(issue).unwrap();
        assert_eq!(flows.len(), 5);
        let first = flows[0];
        assert_eq!(first.fixing_date, Some(d(2025, 2, 11)));
        // 2025-02-13 to 2025-05-13 is 89 days
        assert_relative_eq!(first.amount, 1_000_000.0 * 0.0338 * 89.0 / 360.0, epsilon = 1e-6);
        assert_eq!(flows[4].kind, CashFlowKind::Redemption);
    }
}
