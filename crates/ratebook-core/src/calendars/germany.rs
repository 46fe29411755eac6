//! Eurex (Germany) exchange calendar.

use chrono::NaiveDate;
use std::sync::OnceLock;

use super::holidays::{easter_offset, fixed, HolidayTable};
use super::Calendar;
use crate::types::Date;

static TABLE: OnceLock<HolidayTable> = OnceLock::new();

/// Eurex trading calendar, used for Bund settlement.
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanyEurex;

impl Calendar for GermanyEurex {
    fn name(&self) -> &'static str {
        "Germany Eurex"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
            && !TABLE
                .get_or_init(|| HolidayTable::build(eurex_holidays))
                .contains(date.as_naive_date())
    }
}

fn eurex_holidays(year: i32) -> Vec<NaiveDate> {
    let mut holidays = Vec::new();
    fixed(&mut holidays, year, 1, 1);
    easter_offset(&mut holidays, year, -2);
    easter_offset(&mut holidays, year, 1);
    fixed(&mut holidays, year, 5, 1);
    for day in [24, 25, 26, 31] {
        fixed(&mut holidays, year, 12, day);
    }
    holidays
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eurex_year_end() {
        let cal = GermanyEurex;
        assert!(!cal.is_business_day(Date::from_ymd(2025, 12, 24).unwrap()));
        assert!(!cal.is_business_day(Date::from_ymd(2025, 12, 31).unwrap()));
        assert!(cal.is_business_day(Date::from_ymd(2025, 12, 30).unwrap()));
    }
}
