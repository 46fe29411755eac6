//! Bond cash flows.

use ratebook_core::daycounts::DayCountConvention;
use ratebook_core::types::Date;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a bond cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowKind {
    /// Fixed-rate coupon.
    FixedCoupon,
    /// Index-linked floating coupon.
    FloatingCoupon,
    /// Principal repayment.
    Redemption,
}

impl fmt::Display for CashFlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowKind::FixedCoupon => "FixedRateCoupon",
            CashFlowKind::FloatingCoupon => "FloatingRateCoupon",
            CashFlowKind::Redemption => "Redemption",
        };
        write!(f, "{name}")
    }
}

/// Accrual details of a coupon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Accrual {
    /// Accrual start.
    pub start: Date,
    /// Accrual end.
    pub end: Date,
    /// Reference period start.
    pub reference_start: Date,
    /// Reference period end.
    pub reference_end: Date,
    /// Annual coupon rate (decimal).
    pub rate: f64,
    /// Notional the rate applies to.
    pub nominal: f64,
    /// Accrual day count.
    pub day_count: DayCountConvention,
}

impl Accrual {
    /// Accrual fraction between two dates inside this coupon.
    pub fn fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count
            .time_in_period(start, end, self.reference_start, self.reference_end)
    }

    /// Coupon amount for the full period.
    pub fn amount(&self) -> f64 {
        self.nominal * self.rate * self.fraction(self.start, self.end)
    }
}

/// A dated bond payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// What the payment is.
    pub kind: CashFlowKind,
    /// Payment date.
    pub date: Date,
    /// Payment amount.
    pub amount: f64,
    /// Accrual details for coupons.
    pub accrual: Option<Accrual>,
    /// Index fixing date for floating coupons.
    pub fixing_date: Option<Date>,
}

impl CashFlow {
    /// Creates a coupon paying its full accrual on `date`.
    pub fn coupon(kind: CashFlowKind, date: Date, accrual: Accrual) -> Self {
        Self {
            kind,
            date,
            amount: accrual.amount(),
            accrual: Some(accrual),
            fixing_date: None,
        }
    }

    /// Creates a redemption.
    pub fn redemption(date: Date, amount: f64) -> Self {
        Self {
            kind: CashFlowKind::Redemption,
            date,
            amount,
            accrual: None,
            fixing_date: None,
        }
    }

    /// Attaches the fixing date of a floating coupon.
    pub fn with_fixing_date(mut self, fixing_date: Date) -> Self {
        self.fixing_date = Some(fixing_date);
        self
    }

    /// Interest accrued on `date`; zero outside `(start, payment date)`.
    /// A coupon paid on `date` counts as already paid.
    pub fn accrued_amount(&self, date: Date) -> f64 {
        match self.accrual {
            Some(a) if date > a.start && date < self.date => {
                a.nominal * a.rate * a.fraction(a.start, date.min(a.end))
            }
            _ => 0.0,
        }
    }
}

/// Total accrued interest of a set of flows on `date`.
pub fn accrued_amount(flows: &[CashFlow], date: Date) -> f64 {
    flows.iter().map(|cf| cf.accrued_amount(date)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn semiannual_coupon() -> CashFlow {
        let accrual = Accrual {
            start: d(2025, 6, 15),
            end: d(2025, 12, 15),
            reference_start: d(2025, 6, 15),
            reference_end: d(2025, 12, 15),
            rate: 0.0425,
            nominal: 1000.0,
            day_count: DayCountConvention::ActualActualIsma,
        };
        CashFlow::coupon(CashFlowKind::FixedCoupon, d(2025, 12, 15), accrual)
    }

    #[test]
    fn test_coupon_amount() {
        assert_relative_eq!(semiannual_coupon().amount, 21.25, epsilon = 1e-12);
    }

    #[test]
    fn test_accrued_amount() {
        let cf = semiannual_coupon();
        assert_eq!(cf.accrued_amount(d(2025, 6, 15)), 0.0);
        // 92 of 183 days
        assert_relative_eq!(
            cf.accrued_amount(d(2025, 9, 15)),
            21.25 * 92.0 / 183.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            cf.accrued_amount(d(2025, 12, 14)),
            21.25 * 182.0 / 183.0,
            epsilon = 1e-12
        );
        assert_eq!(cf.accrued_amount(d(2025, 12, 15)), 0.0);
        assert_eq!(cf.accrued_amount(d(2025, 12, 16)), 0.0);
    }

    #[test]
    fn test_redemption_does_not_accrue() {
        let r = CashFlow::redemption(d(2026, 1, 12), 1_000_000.0);
        assert_eq!(r.accrued_amount(d(2026, 1, 1)), 0.0);
        assert_eq!(r.kind.to_string(), "Redemption");
    }
}
