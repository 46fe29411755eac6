//! Japanese national holidays.

use chrono::{Datelike, NaiveDate, Weekday};
use std::sync::OnceLock;

use super::holidays::{fixed, nth_weekday_of_month, HolidayTable};
use super::Calendar;
use crate::types::Date;

static TABLE: OnceLock<HolidayTable> = OnceLock::new();

/// Japan calendar (JGB settlement).
///
/// Includes the year-end bank closure (Dec 31 to Jan 3), the equinox days
/// from the astronomical approximation, the Olympic-year moves and
/// furikae kyujitsu substitutes for holidays falling on Sunday.
#[derive(Debug, Clone, Copy, Default)]
pub struct Japan;

impl Calendar for Japan {
    fn name(&self) -> &'static str {
        "Japan"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
            && !TABLE
                .get_or_init(|| HolidayTable::build(japan_holidays))
                .contains(date.as_naive_date())
    }
}

fn japan_holidays(year: i32) -> Vec<NaiveDate> {
    let mut holidays = Vec::new();

    for day in 1..=3 {
        fixed(&mut holidays, year, 1, day);
    }
    holidays.extend(nth_weekday_of_month(year, 1, Weekday::Mon, 2));
    fixed(&mut holidays, year, 2, 11);

    // Emperor's birthday
    if year >= 2020 {
        fixed(&mut holidays, year, 2, 23);
    } else if (1989..=2018).contains(&year) {
        fixed(&mut holidays, year, 12, 23);
    }

    fixed(&mut holidays, year, 3, vernal_equinox(year));
    fixed(&mut holidays, year, 4, 29);
    fixed(&mut holidays, year, 5, 3);
    fixed(&mut holidays, year, 5, 4);
    fixed(&mut holidays, year, 5, 5);

    // Marine Day
    match year {
        2020 => fixed(&mut holidays, 2020, 7, 23),
        2021 => fixed(&mut holidays, 2021, 7, 22),
        _ => holidays.extend(nth_weekday_of_month(year, 7, Weekday::Mon, 3)),
    }

    // Mountain Day
    match year {
        2020 => fixed(&mut holidays, 2020, 8, 10),
        2021 => fixed(&mut holidays, 2021, 8, 9),
        y if y >= 2016 => fixed(&mut holidays, y, 8, 11),
        _ => {}
    }

    holidays.extend(nth_weekday_of_month(year, 9, Weekday::Mon, 3));
    fixed(&mut holidays, year, 9, autumnal_equinox(year));

    // Sports Day
    match year {
        2020 => fixed(&mut holidays, 2020, 7, 24),
        2021 => fixed(&mut holidays, 2021, 7, 23),
        _ => holidays.extend(nth_weekday_of_month(year, 10, Weekday::Mon, 2)),
    }

    fixed(&mut holidays, year, 11, 3);
    fixed(&mut holidays, year, 11, 23);
    fixed(&mut holidays, year, 12, 31);

    if year == 2019 {
        for (m, d) in [(4, 30), (5, 1), (5, 2), (10, 22)] {
            fixed(&mut holidays, 2019, m, d);
        }
    }

    add_substitutes(&mut holidays);
    holidays
}

/// Vernal equinox day in March.
fn vernal_equinox(year: i32) -> u32 {
    let y = f64::from(year - 1980);
    (20.8431 + 0.242194 * y - (y / 4.0).floor()) as u32
}

/// Autumnal equinox day in September.
fn autumnal_equinox(year: i32) -> u32 {
    let y = f64::from(year - 1980);
    (23.2488 + 0.242194 * y - (y / 4.0).floor()) as u32
}

/// A holiday on Sunday moves to the next day that is not already a holiday.
fn add_substitutes(holidays: &mut Vec<NaiveDate>) {
    let mut substitutes = Vec::new();
    for &holiday in holidays.iter() {
        if holiday.weekday() != Weekday::Sun {
            continue;
        }
        let mut candidate = holiday;
        while let Some(next) = candidate.succ_opt() {
            candidate = next;
            if !holidays.contains(&candidate) && !substitutes.contains(&candidate) {
                substitutes.push(candidate);
                break;
            }
        }
    }
    holidays.extend(substitutes);
}
