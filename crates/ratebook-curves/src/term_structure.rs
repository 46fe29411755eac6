//! The term-structure interface consumed by indices and pricing engines.

use ratebook_core::daycounts::DayCountConvention;
use ratebook_core::types::{Compounding, Date};

/// A discounting term structure anchored at a reference date.
pub trait YieldTermStructure: Send + Sync {
    /// Date at which discount factors equal one.
    fn reference_date(&self) -> Date;

    /// Day count used to turn dates into curve time.
    fn day_count(&self) -> DayCountConvention;

    /// Discount factor at curve time `t` (years).
    fn discount_time(&self, t: f64) -> f64;

    /// Curve time of a date.
    fn time_from_reference(&self, date: Date) -> f64 {
        self.day_count().time(self.reference_date(), date)
    }

    /// Discount factor for a date.
    fn discount(&self, date: Date) -> f64 {
        self.discount_time(self.time_from_reference(date))
    }

    /// Zero rate to a date under the given compounding, on curve time.
    ///
    /// At the reference date the rate is taken one day ahead.
    fn zero_rate(&self, date: Date, compounding: Compounding) -> f64 {
        let date = if date <= self.reference_date() {
            self.reference_date().add_days(1)
        } else {
            date
        };
        let t = self.time_from_reference(date);
        compounding.implied_rate(self.discount_time(t), t)
    }

    /// Simply compounded forward rate between two dates, accrued on `day_count`.
    fn forward_rate(&self, start: Date, end: Date, day_count: DayCountConvention) -> f64 {
        let tau = day_count.time(start, end);
        if tau <= 0.0 {
            return 0.0;
        }
        (self.discount(start) / self.discount(end) - 1.0) / tau
    }
}
