//! Italian settlement calendar.

use chrono::NaiveDate;
use std::sync::OnceLock;

use super::holidays::{easter_offset, fixed, HolidayTable};
use super::Calendar;
use crate::types::Date;

static TABLE: OnceLock<HolidayTable> = OnceLock::new();

/// Italy settlement calendar (BTP settlement).
#[derive(Debug, Clone, Copy, Default)]
pub struct Italy;

impl Calendar for Italy {
    fn name(&self) -> &'static str {
        "Italy"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
            && !TABLE
                .get_or_init(|| HolidayTable::build(italy_holidays))
                .contains(date.as_naive_date())
    }
}

fn italy_holidays(year: i32) -> Vec<NaiveDate> {
    let mut holidays = Vec::new();
    fixed(&mut holidays, year, 1, 1);
    fixed(&mut holidays, year, 1, 6);
    easter_offset(&mut holidays, year, 1);
    fixed(&mut holidays, year, 4, 25);
    fixed(&mut holidays, year, 5, 1);
    if year >= 2000 {
        fixed(&mut holidays, year, 6, 2);
    }
    fixed(&mut holidays, year, 8, 15);
    fixed(&mut holidays, year, 11, 1);
    fixed(&mut holidays, year, 12, 8);
    fixed(&mut holidays, year, 12, 25);
    fixed(&mut holidays, year, 12, 26);
    if year == 1999 {
        fixed(&mut holidays, year, 12, 31);
    }
    holidays
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_italy_holidays() {
        let cal = Italy;
        assert!(!cal.is_business_day(Date::from_ymd(2025, 1, 6).unwrap()));
        assert!(!cal.is_business_day(Date::from_ymd(2025, 4, 25).unwrap()));
        assert!(!cal.is_business_day(Date::from_ymd(2025, 6, 2).unwrap()));
        assert!(!cal.is_business_day(Date::from_ymd(2025, 8, 15).unwrap()));
        // Good Friday is a working day in Italy
        assert!(cal.is_business_day(Date::from_ymd(2025, 4, 18).unwrap()));
    }
}
