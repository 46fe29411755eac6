//! US government bond market calendar.

use chrono::{Datelike, NaiveDate, Weekday};
use std::sync::OnceLock;

use super::holidays::{
    easter_offset, last_weekday_of_month, nth_weekday_of_month, HolidayTable,
};
use super::Calendar;
use crate::types::Date;

static TABLE: OnceLock<HolidayTable> = OnceLock::new();

/// US government bond market calendar.
///
/// Federal holidays observed by the Treasury market, plus Good Friday.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedStatesGovernmentBond;

impl Calendar for UnitedStatesGovernmentBond {
    fn name(&self) -> &'static str {
        "US Government Bond"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
            && !TABLE
                .get_or_init(|| HolidayTable::build(us_holidays))
                .contains(date.as_naive_date())
    }
}

fn us_holidays(year: i32) -> Vec<NaiveDate> {
    let mut holidays = Vec::new();

    // New Year's Day, Monday if Sunday
    if let Some(ny) = NaiveDate::from_ymd_opt(year, 1, 1) {
        match ny.weekday() {
            Weekday::Sun => holidays.extend(ny.succ_opt()),
            Weekday::Sat => {}
            _ => holidays.push(ny),
        }
    }

    if year >= 1983 {
        holidays.extend(nth_weekday_of_month(year, 1, Weekday::Mon, 3));
    }
    holidays.extend(nth_weekday_of_month(year, 2, Weekday::Mon, 3));
    easter_offset(&mut holidays, year, -2);
    holidays.extend(last_weekday_of_month(year, 5, Weekday::Mon));
    if year >= 2022 {
        observed(&mut holidays, year, 6, 19);
    }
    observed(&mut holidays, year, 7, 4);
    holidays.extend(nth_weekday_of_month(year, 9, Weekday::Mon, 1));
    holidays.extend(nth_weekday_of_month(year, 10, Weekday::Mon, 2));
    if let Some(vets) = NaiveDate::from_ymd_opt(year, 11, 11) {
        if vets.weekday() == Weekday::Sun {
            holidays.extend(vets.succ_opt());
        } else if vets.weekday() != Weekday::Sat {
            holidays.push(vets);
        }
    }
    holidays.extend(nth_weekday_of_month(year, 11, Weekday::Thu, 4));
    observed(&mut holidays, year, 12, 25);

    holidays
}

/// Friday before when on Saturday, Monday after when on Sunday.
fn observed(holidays: &mut Vec<NaiveDate>, year: i32, month: u32, day: u32) {
    if let Some(d) = NaiveDate::from_ymd_opt(year, month, day) {
        match d.weekday() {
            Weekday::Sat => holidays.extend(d.pred_opt()),
            Weekday::Sun => holidays.extend(d.succ_opt()),
            _ => holidays.push(d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_us_fixed_holidays() {
        let cal = UnitedStatesGovernmentBond;
        assert!(!cal.is_business_day(d(2025, 1, 1)));
        assert!(!cal.is_business_day(d(2025, 7, 4)));
        assert!(!cal.is_business_day(d(2025, 12, 25)));
        // 2026-07-04 is a Saturday, observed Friday
        assert!(!cal.is_business_day(d(2026, 7, 3)));
    }

    #[test]
    fn test_us_floating_holidays() {
        let cal = UnitedStatesGovernmentBond;
        assert!(!cal.is_business_day(d(2025, 1, 20)));
        assert!(!cal.is_business_day(d(2025, 4, 18)));
        assert!(!cal.is_business_day(d(2025, 11, 27)));
        assert!(cal.is_business_day(d(2025, 11, 28)));
    }
}
