//! TARGET euro settlement calendar.

use chrono::NaiveDate;
use std::sync::OnceLock;

use super::holidays::{easter_offset, fixed, HolidayTable};
use super::Calendar;
use crate::types::Date;

static TABLE: OnceLock<HolidayTable> = OnceLock::new();

/// TARGET calendar used for EUR money-market and swap settlement.
#[derive(Debug, Clone, Copy, Default)]
pub struct Target;

impl Calendar for Target {
    fn name(&self) -> &'static str {
        "TARGET"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
            && !TABLE
                .get_or_init(|| HolidayTable::build(target_holidays))
                .contains(date.as_naive_date())
    }
}

fn target_holidays(year: i32) -> Vec<NaiveDate> {
    let mut holidays = Vec::new();
    fixed(&mut holidays, year, 1, 1);
    if year >= 2000 {
        easter_offset(&mut holidays, year, -2);
        easter_offset(&mut holidays, year, 1);
        fixed(&mut holidays, year, 5, 1);
        fixed(&mut holidays, year, 12, 26);
    }
    fixed(&mut holidays, year, 12, 25);
    if (1998..=2001).contains(&year) {
        fixed(&mut holidays, year, 12, 31);
    }
    holidays
}
