//! Holiday tables and the date rules used to build them.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// First year covered by the holiday tables.
pub const MIN_YEAR: i32 = 1950;
/// Last year covered by the holiday tables.
pub const MAX_YEAR: i32 = 2200;

/// Pre-computed set of holidays for one market.
///
/// Weekends are not stored; calendars check them separately.
#[derive(Debug, Clone)]
pub struct HolidayTable {
    dates: HashSet<NaiveDate>,
}

impl HolidayTable {
    /// Builds the table by evaluating `rule` for every covered year.
    pub fn build(rule: fn(i32) -> Vec<NaiveDate>) -> Self {
        let dates = (MIN_YEAR..=MAX_YEAR).flat_map(rule).collect();
        Self { dates }
    }

    /// Returns true if the date is a listed holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// Pushes a fixed-date holiday if the date exists.
pub(crate) fn fixed(holidays: &mut Vec<NaiveDate>, year: i32, month: u32, day: u32) {
    if let Some(d) = NaiveDate::from_ymd_opt(year, month, day) {
        holidays.push(d);
    }
}

/// Pushes a fixed-date holiday, moved to Monday when it falls on a weekend.
pub(crate) fn fixed_monday_if_weekend(
    holidays: &mut Vec<NaiveDate>,
    year: i32,
    month: u32,
    day: u32,
) {
    if let Some(d) = NaiveDate::from_ymd_opt(year, month, day) {
        let observed = match d.weekday() {
            Weekday::Sat => d + chrono::Duration::days(2),
            Weekday::Sun => d + chrono::Duration::days(1),
            _ => d,
        };
        holidays.push(observed);
    }
}

/// Pushes a holiday relative to Easter Sunday.
pub(crate) fn easter_offset(holidays: &mut Vec<NaiveDate>, year: i32, offset: i64) {
    if let Some(easter) = easter_sunday(year) {
        holidays.push(easter + chrono::Duration::days(offset));
    }
}

/// Calculate the nth occurrence of a weekday in a month.
pub(crate) fn nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    n: u32,
) -> Option<NaiveDate> {
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days_until = (weekday.num_days_from_monday() as i32
        - first_of_month.weekday().num_days_from_monday() as i32)
        .rem_euclid(7) as u32;
    NaiveDate::from_ymd_opt(year, month, 1 + days_until + (n - 1) * 7)
}

/// Calculate the last occurrence of a weekday in a month.
pub(crate) fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let last_day = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?.pred_opt()?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt()?
    };
    let days_back = (last_day.weekday().num_days_from_monday() as i32
        - weekday.num_days_from_monday() as i32)
        .rem_euclid(7);
    last_day.checked_sub_signed(chrono::Duration::days(i64::from(days_back)))
}

/// Calculate Easter Sunday using the Anonymous Gregorian algorithm.
#[allow(clippy::many_single_char_names)]
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easter_dates() {
        assert_eq!(easter_sunday(2024), NaiveDate::from_ymd_opt(2024, 3, 31));
        assert_eq!(easter_sunday(2025), NaiveDate::from_ymd_opt(2025, 4, 20));
        assert_eq!(easter_sunday(2026), NaiveDate::from_ymd_opt(2026, 4, 5));
    }

    #[test]
    fn test_weekday_rules() {
        assert_eq!(
            nth_weekday_of_month(2025, 1, Weekday::Mon, 3),
            NaiveDate::from_ymd_opt(2025, 1, 20)
        );
        assert_eq!(
            last_weekday_of_month(2025, 5, Weekday::Mon),
            NaiveDate::from_ymd_opt(2025, 5, 26)
        );
    }

    #[test]
    fn test_monday_substitute() {
        let mut h = Vec::new();
        // 2022-12-25 is a Sunday
        fixed_monday_if_weekend(&mut h, 2022, 12, 25);
        assert_eq!(h, vec![NaiveDate::from_ymd_opt(2022, 12, 26).unwrap()]);
    }
}
