//! 30E/360 (Eurobond basis).

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// 30E/360: both day-of-month values are capped at 30.
#[derive(Debug, Clone, Copy, Default)]
pub struct Thirty360Eurobond;

impl DayCount for Thirty360Eurobond {
    fn name(&self) -> &'static str {
        "30E/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let d1 = i64::from(start.day().min(30));
        let d2 = i64::from(end.day().min(30));
        360 * i64::from(end.year() - start.year())
            + 30 * (i64::from(end.month()) - i64::from(start.month()))
            + (d2 - d1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_thirty_first_capped() {
        let start = Date::from_ymd(2025, 1, 31).unwrap();
        let end = Date::from_ymd(2025, 7, 31).unwrap();
        assert_eq!(Thirty360Eurobond.day_count(start, end), 180);
        assert_eq!(Thirty360Eurobond.year_fraction(start, end), dec!(0.5));
    }

    #[test]
    fn test_february_end_not_extended() {
        let start = Date::from_ymd(2025, 2, 28).unwrap();
        let end = Date::from_ymd(2025, 3, 31).unwrap();
        assert_eq!(Thirty360Eurobond.day_count(start, end), 32);
    }
}
