//! England and Wales bank holidays, the settlement calendar for gilts.

use chrono::{Datelike, NaiveDate, Weekday};
use std::sync::OnceLock;

use super::holidays::{
    easter_offset, fixed, fixed_monday_if_weekend, last_weekday_of_month, nth_weekday_of_month,
    HolidayTable,
};
use super::Calendar;
use crate::types::Date;

static TABLE: OnceLock<HolidayTable> = OnceLock::new();

/// UK bank holiday calendar.
///
/// New Year's Day, Good Friday, Easter Monday, the early May, spring and
/// summer bank holidays, Christmas and Boxing Day with weekend substitutes,
/// plus the one-off royal holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedKingdom;

impl Calendar for UnitedKingdom {
    fn name(&self) -> &'static str {
        "UK Bank Holidays"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
            && !TABLE
                .get_or_init(|| HolidayTable::build(uk_holidays))
                .contains(date.as_naive_date())
    }
}

fn uk_holidays(year: i32) -> Vec<NaiveDate> {
    let mut holidays = Vec::new();

    fixed_monday_if_weekend(&mut holidays, year, 1, 1);
    easter_offset(&mut holidays, year, -2);
    easter_offset(&mut holidays, year, 1);

    // Early May bank holiday, moved for VE Day in 1995 and 2020
    match year {
        1995 | 2020 => fixed(&mut holidays, year, 5, 8),
        _ => holidays.extend(nth_weekday_of_month(year, 5, Weekday::Mon, 1)),
    }

    // Spring bank holiday, moved for the jubilees
    match year {
        2002 => fixed(&mut holidays, 2002, 6, 4),
        2012 => fixed(&mut holidays, 2012, 6, 4),
        2022 => fixed(&mut holidays, 2022, 6, 2),
        _ => holidays.extend(last_weekday_of_month(year, 5, Weekday::Mon)),
    }

    holidays.extend(last_weekday_of_month(year, 8, Weekday::Mon));

    christmas(&mut holidays, year);

    match year {
        1999 => fixed(&mut holidays, 1999, 12, 31),
        2002 => fixed(&mut holidays, 2002, 6, 3),
        2011 => fixed(&mut holidays, 2011, 4, 29),
        2012 => fixed(&mut holidays, 2012, 6, 5),
        2022 => {
            fixed(&mut holidays, 2022, 6, 3);
            fixed(&mut holidays, 2022, 9, 19);
        }
        2023 => fixed(&mut holidays, 2023, 5, 8),
        _ => {}
    }

    holidays
}

/// Christmas and Boxing Day, each substituted onto the next free weekday.
fn christmas(holidays: &mut Vec<NaiveDate>, year: i32) {
    let Some(xmas) = NaiveDate::from_ymd_opt(year, 12, 25) else {
        return;
    };
    match xmas.weekday() {
        Weekday::Fri => {
            fixed(holidays, year, 12, 25);
            fixed(holidays, year, 12, 28);
        }
        Weekday::Sat => {
            fixed(holidays, year, 12, 27);
            fixed(holidays, year, 12, 28);
        }
        Weekday::Sun => {
            fixed(holidays, year, 12, 26);
            fixed(holidays, year, 12, 27);
        }
        _ => {
            fixed(holidays, year, 12, 25);
            fixed(holidays, year, 12, 26);
        }
    }
}
