//! Fixed-rate bullet bonds.

use ratebook_core::calendars::{BusinessDayConvention, Calendar, CalendarId};
use ratebook_core::daycounts::DayCountConvention;
use ratebook_core::types::Date;

use super::Bond;
use crate::cashflows::{Accrual, CashFlow, CashFlowKind};
use crate::error::{BondError, BondResult};
use crate::schedule::Schedule;

/// A bullet bond paying a single fixed coupon rate.
#[derive(Debug, Clone)]
pub struct FixedRateBond {
    schedule: Schedule,
    face_value: f64,
    coupon_rate: f64,
    day_count: DayCountConvention,
    settlement_days: u32,
    payment_convention: BusinessDayConvention,
}

impl FixedRateBond {
    /// Creates a bond. `coupon_rate` is a decimal (0.0425 for 4.25%).
    pub fn new(
        schedule: Schedule,
        face_value: f64,
        coupon_rate: f64,
        day_count: DayCountConvention,
        settlement_days: u32,
    ) -> BondResult<Self> {
        if face_value <= 0.0 || !face_value.is_finite() {
            return Err(BondError::invalid_spec(format!(
                "face value must be positive, got {face_value}"
            )));
        }
        if !coupon_rate.is_finite() {
            return Err(BondError::invalid_spec("coupon rate is not finite"));
        }
        Ok(Self {
            schedule,
            face_value,
            coupon_rate,
            day_count,
            settlement_days,
            payment_convention: BusinessDayConvention::Following,
        })
    }

    /// Sets the adjustment of payment dates (Following by default).
    pub fn with_payment_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.payment_convention = convention;
        self
    }

    /// Annual coupon rate as a decimal.
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Accrual day count.
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
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

impl Bond for FixedRateBond {
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
        let mut flows = Vec::with_capacity(self.schedule.len() + 1);
        for period in self.schedule.periods() {
            let date = self.payment_date(period.end)?;
            if date <= valuation_date {
                continue;
            }
            let accrual = Accrual {
                start: period.start,
                end: period.end,
                reference_start: period.reference_start,
                reference_end: period.reference_end,
                rate: self.coupon_rate,
                nominal: self.face_value,
                day_count: self.day_count,
            };
            flows.push(CashFlow::coupon(CashFlowKind::FixedCoupon, date, accrual));
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

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn gilt() -> FixedRateBond {
        let config = ScheduleConfig::new(d(2024, 6, 15), d(2034, 6, 15), Frequency::SemiAnnual)
            .with_calendar(CalendarId::UnitedKingdom);
        let schedule = Schedule::generate(config).unwrap();
        FixedRateBond::new(schedule, 1000.0, 0.0425, DayCountConvention::ActualActualIsma, 2)
            .unwrap()
    }

    #[test]
    fn test_cash_flows() {
        let bond = gilt();
        let flows = bond.cash_flows(d(2024, 6, 14)).unwrap();
        assert_eq!(flows.len(), 21);
        // 2024-12-15 is a Sunday, paid on Monday
        assert_eq!(flows[0].date, d(2024, 12, 16));
        assert_relative_eq!(flows[0].amount, 21.25, epsilon = 1e-9);
        let last = flows.last().unwrap();
        assert_eq!(last.kind, CashFlowKind::Redemption);
        assert_eq!(last.amount, 1000.0);
        assert_eq!(last.date, flows[flows.len() - 2].date);
    }

    #[test]
    fn test_paid_flows_are_dropped() {
        let bond = gilt();
        let flows = bond.cash_flows(d(2025, 6, 13)).unwrap();
        // Coupons from 2025-06-15 onwards plus redemption
        assert_eq!(flows.len(), 20);
        assert_eq!(flows[0].date, d(2025, 6, 16));
    }

    #[test]
    fn test_accrued_amount() {
        let bond = gilt();
        let accrued = bond.accrued_amount(d(2024, 9, 13), d(2024, 9, 15)).unwrap();
        // 92 of 183 days into the first coupon
        assert_relative_eq!(accrued, 21.25 * 92.0 / 183.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_bad_face() {
        let config = ScheduleConfig::new(d(2024, 6, 15), d(2026, 6, 15), Frequency::Annual);
        let schedule = Schedule::generate(config).unwrap();
        assert!(FixedRateBond::new(schedule, 0.0, 0.04, DayCountConvention::Actual360, 2).is_err());
    }
}
