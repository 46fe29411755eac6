//! Actual/Actual ISMA and Actual/Actual Bond.
//!
//! Accrual inside a coupon reference period is `period_length * days /
//! days_in_period`, where the period length in years comes from the
//! reference period's whole number of months. Fractions that straddle the
//! reference period are split into whole notional periods plus the
//! in-period remainders.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual/Actual ISMA (ICMA Rule 251).
#[derive(Debug, Clone, Copy, Default)]
pub struct ActActIsma;

impl DayCount for ActActIsma {
    fn name(&self) -> &'static str {
        "ACT/ACT ISMA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        isma_fraction(start, end, start, end)
    }

    fn year_fraction_in_period(
        &self,
        start: Date,
        end: Date,
        ref_start: Date,
        ref_end: Date,
    ) -> Decimal {
        isma_fraction(start, end, ref_start, ref_end)
    }
}

/// Actual/Actual Bond: the ISMA rule under its bond-market name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActActBond;

impl DayCount for ActActBond {
    fn name(&self) -> &'static str {
        "ACT/ACT Bond"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        isma_fraction(start, end, start, end)
    }

    fn year_fraction_in_period(
        &self,
        start: Date,
        end: Date,
        ref_start: Date,
        ref_end: Date,
    ) -> Decimal {
        isma_fraction(start, end, ref_start, ref_end)
    }
}

fn isma_fraction(start: Date, end: Date, ref_start: Date, ref_end: Date) -> Decimal {
    if start == end {
        return Decimal::ZERO;
    }
    if start > end {
        return -isma_fraction(end, start, ref_start, ref_end);
    }

    let (mut ref_start, mut ref_end) = (ref_start, ref_end);
    let mut months = ((12.0 * ref_start.days_between(&ref_end) as f64) / 365.0).round() as i32;
    if months <= 0 {
        ref_start = start;
        ref_end = start.add_years(1).unwrap_or(end);
        months = 12;
    }
    let period = Decimal::from(months) / Decimal::from(12);

    if end <= ref_end {
        if start >= ref_start {
            let ref_days = ref_start.days_between(&ref_end);
            if ref_days == 0 {
                return Decimal::ZERO;
            }
            return period * Decimal::from(start.days_between(&end)) / Decimal::from(ref_days);
        }
        // Long first period: roll the reference window back one notional period.
        let Ok(previous) = ref_start.add_months(-months) else {
            return Decimal::ZERO;
        };
        if end > ref_start {
            return isma_fraction(start, ref_start, previous, ref_start)
                + isma_fraction(ref_start, end, ref_start, ref_end);
        }
        return isma_fraction(start, end, previous, ref_start);
    }

    // Past the reference period: whole notional periods plus the remainder.
    let mut sum = isma_fraction(start, ref_end, ref_start, ref_end);
    let mut i = 0;
    loop {
        let (Ok(next_start), Ok(next_end)) = (
            ref_end.add_months(months * i),
            ref_end.add_months(months * (i + 1)),
        ) else {
            return sum;
        };
        if end < next_end {
            return sum + isma_fraction(next_start, end, next_start, next_end);
        }
        sum += period;
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_full_semiannual_period() {
        let yf = ActActIsma.year_fraction_in_period(
            d(2024, 6, 15),
            d(2024, 12, 15),
            d(2024, 6, 15),
            d(2024, 12, 15),
        );
        assert_eq!(yf, dec!(0.5));
    }

    #[test]
    fn test_partial_period() {
        // 92 of 183 days in a half-year period
        let yf = ActActIsma.year_fraction_in_period(
            d(2024, 6, 15),
            d(2024, 9, 15),
            d(2024, 6, 15),
            d(2024, 12, 15),
        );
        assert_eq!(yf, dec!(0.5) * dec!(92) / dec!(183));
    }

    #[test]
    fn test_short_front_stub() {
        // Stub inside a notional period starting before the accrual start
        let yf = ActActIsma.year_fraction_in_period(
            d(2024, 9, 15),
            d(2024, 12, 15),
            d(2024, 6, 15),
            d(2024, 12, 15),
        );
        assert_eq!(yf, dec!(0.5) * dec!(91) / dec!(183));
    }

    #[test]
    fn test_spanning_multiple_periods() {
        let yf = ActActIsma.year_fraction_in_period(
            d(2024, 6, 15),
            d(2025, 6, 15),
            d(2024, 6, 15),
            d(2024, 12, 15),
        );
        assert_eq!(yf, dec!(1));
    }

    #[test]
    fn test_bond_matches_isma() {
        let a = ActActBond.year_fraction_in_period(
            d(2025, 1, 10),
            d(2025, 5, 3),
            d(2025, 1, 10),
            d(2025, 7, 10),
        );
        let b = ActActIsma.year_fraction_in_period(
            d(2025, 1, 10),
            d(2025, 5, 3),
            d(2025, 1, 10),
            d(2025, 7, 10),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_reversed_dates_negate() {
        let fwd = ActActIsma.year_fraction(d(2024, 1, 1), d(2025, 1, 1));
        let back = ActActIsma.year_fraction(d(2025, 1, 1), d(2024, 1, 1));
        assert_eq!(fwd, -back);
        assert_eq!(fwd, dec!(1));
    }
}
