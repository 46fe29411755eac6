//! Bond instruments.
//!
//! Instruments are immutable once built. Cash flows are generated on demand
//! for an explicit valuation date, so floating coupons see the index state
//! as of that date.

mod fixed;
mod floating;

pub use fixed::FixedRateBond;
pub use floating::{FloatingCouponTerms, FloatingRateBond};

use ratebook_core::calendars::{Calendar, CalendarId};
use ratebook_core::types::Date;
use std::fmt;

use crate::cashflows::{self, CashFlow};
use crate::error::BondResult;
use crate::schedule::Schedule;

/// Common interface of priced bonds.
pub trait Bond: fmt::Debug {
    /// Coupon schedule.
    fn schedule(&self) -> &Schedule;

    /// Face value.
    fn face_value(&self) -> f64;

    /// Business days from trade to settlement.
    fn settlement_days(&self) -> u32;

    /// Settlement calendar.
    fn calendar(&self) -> CalendarId;

    /// Cash flows paid after `valuation_date`, in payment order.
    fn cash_flows(&self, valuation_date: Date) -> BondResult<Vec<CashFlow>>;

    /// Issue date (first schedule date).
    fn issue_date(&self) -> Date {
        self.schedule().start_date()
    }

    /// Maturity date (last schedule date).
    fn maturity(&self) -> Date {
        self.schedule().end_date()
    }

    /// Settlement date of a trade on `valuation_date`.
    fn settlement_date(&self, valuation_date: Date) -> Date {
        self.calendar()
            .calendar()
            .advance_business_days(valuation_date, self.settlement_days() as i32)
    }

    /// Accrued interest (currency amount) at `settlement`.
    fn accrued_amount(&self, valuation_date: Date, settlement: Date) -> BondResult<f64> {
        Ok(cashflows::accrued_amount(
            &self.cash_flows(valuation_date)?,
            settlement,
        ))
    }
}
