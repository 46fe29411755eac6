//! Business day calendars and conventions.
//!
//! Each market calendar is a zero-sized handle over a lazily built holiday
//! table. [`CalendarId`] names the calendars so conventions can be stored in
//! configuration and resolved to a `&'static dyn Calendar`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod conventions;
mod germany;
mod holidays;
mod italy;
mod japan;
mod target;
mod uk;
mod us;

pub use conventions::BusinessDayConvention;
pub use germany::GermanyEurex;
pub use holidays::easter_sunday;
pub use italy::Italy;
pub use japan::Japan;
pub use target::Target;
pub use uk::UnitedKingdom;
pub use us::UnitedStatesGovernmentBond;

use crate::error::{CoreError, CoreResult};
use crate::types::{normalize_name, Date};

/// Trait for business day calendars.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a weekend day or holiday.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> CoreResult<Date> {
        conventions::adjust(date, convention, self)
    }

    /// Advances a date by a number of business days.
    ///
    /// A zero count returns the date rolled forward to a business day.
    fn advance_business_days(&self, date: Date, days: i32) -> Date {
        if days == 0 {
            let mut result = date;
            while !self.is_business_day(result) {
                result = result.add_days(1);
            }
            return result;
        }

        let mut result = date;
        let mut remaining = days.abs();
        let direction: i64 = if days > 0 { 1 } else { -1 };

        while remaining > 0 {
            result = result.add_days(direction);
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        result
    }
}

/// A weekend-only calendar (no holidays).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &'static str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

/// Identifier for the supported holiday calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum CalendarId {
    /// England and Wales bank holidays.
    UnitedKingdom,
    /// US government bond market (SIFMA style).
    UnitedStatesGovernmentBond,
    /// Japanese national holidays.
    Japan,
    /// TARGET euro settlement calendar.
    Target,
    /// Eurex derivatives exchange (Germany).
    GermanyEurex,
    /// Italian settlement calendar.
    Italy,
    /// Saturdays and Sundays only.
    WeekendsOnly,
}

impl CalendarId {
    /// Returns the calendar implementation.
    #[must_use]
    pub fn calendar(self) -> &'static dyn Calendar {
        match self {
            CalendarId::UnitedKingdom => &UnitedKingdom,
            CalendarId::UnitedStatesGovernmentBond => &UnitedStatesGovernmentBond,
            CalendarId::Japan => &Japan,
            CalendarId::Target => &Target,
            CalendarId::GermanyEurex => &GermanyEurex,
            CalendarId::Italy => &Italy,
            CalendarId::WeekendsOnly => &WeekendsOnly,
        }
    }
}

impl fmt::Display for CalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.calendar().name())
    }
}

impl FromStr for CalendarId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "UNITEDKINGDOM" | "UK" => Ok(CalendarId::UnitedKingdom),
            "UNITEDSTATESGOVERNMENTBOND" | "USGOVERNMENTBOND" | "US" => {
                Ok(CalendarId::UnitedStatesGovernmentBond)
            }
            "JAPAN" => Ok(CalendarId::Japan),
            "TARGET" | "TARGET2" => Ok(CalendarId::Target),
            "GERMANYEUREX" | "EUREX" => Ok(CalendarId::GermanyEurex),
            "ITALY" => Ok(CalendarId::Italy),
            "WEEKENDSONLY" => Ok(CalendarId::WeekendsOnly),
            _ => Err(CoreError::unknown("calendar", s)),
        }
    }
}

impl TryFrom<String> for CalendarId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_weekends_only() {
        let cal = WeekendsOnly;
        assert!(cal.is_business_day(d(2025, 1, 1)));
        assert!(!cal.is_business_day(d(2025, 1, 4)));
    }

    #[test]
    fn test_advance_business_days() {
        let cal = CalendarId::Target.calendar();
        // Wed 2025-12-24 + 2 skips Christmas, St Stephen and the weekend
        assert_eq!(cal.advance_business_days(d(2025, 12, 24), 2), d(2025, 12, 30));
        assert_eq!(cal.advance_business_days(d(2025, 12, 29), -1), d(2025, 12, 24));
        assert_eq!(cal.advance_business_days(d(2025, 12, 27), 0), d(2025, 12, 29));
    }

    #[test]
    fn test_calendar_id_parse() {
        assert_eq!(
            "TARGET".parse::<CalendarId>().unwrap(),
            CalendarId::Target
        );
        assert_eq!(
            "United Kingdom".parse::<CalendarId>().unwrap(),
            CalendarId::UnitedKingdom
        );
        assert_eq!(
            "Germany Eurex".parse::<CalendarId>().unwrap(),
            CalendarId::GermanyEurex
        );
        assert!("Atlantis".parse::<CalendarId>().is_err());
    }
}
