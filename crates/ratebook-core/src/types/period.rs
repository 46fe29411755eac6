//! Calendar periods such as `3M` or `10Y`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Unit of a [`Period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Calendar days
    Days,
    /// Weeks of seven days
    Weeks,
    /// Calendar months
    Months,
    /// Calendar years
    Years,
}

/// A length of calendar time, e.g. `6M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    /// Number of units.
    pub length: i32,
    /// The unit.
    pub unit: TimeUnit,
}

impl Period {
    /// Creates a period.
    #[must_use]
    pub const fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// Shorthand for a number of months.
    #[must_use]
    pub const fn months(length: i32) -> Self {
        Self::new(length, TimeUnit::Months)
    }

    /// Shorthand for a number of years.
    #[must_use]
    pub const fn years(length: i32) -> Self {
        Self::new(length, TimeUnit::Years)
    }

    /// Approximate length in years, used for ordering tenors.
    #[must_use]
    pub fn approx_years(&self) -> f64 {
        let n = f64::from(self.length);
        match self.unit {
            TimeUnit::Days => n / 365.0,
            TimeUnit::Weeks => n * 7.0 / 365.0,
            TimeUnit::Months => n / 12.0,
            TimeUnit::Years => n,
        }
    }
}

impl FromStr for Period {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(|| CoreError::invalid_period(s, "missing unit"))?;
        let (num, unit) = trimmed.split_at(split);
        let length: i32 = num
            .trim()
            .parse()
            .map_err(|_| CoreError::invalid_period(s, "length is not an integer"))?;
        let unit = match unit.to_ascii_uppercase().as_str() {
            "D" => TimeUnit::Days,
            "W" => TimeUnit::Weeks,
            "M" => TimeUnit::Months,
            "Y" => TimeUnit::Years,
            _ => return Err(CoreError::invalid_period(s, "unit must be D, W, M or Y")),
        };
        Ok(Period::new(length, unit))
    }
}

impl TryFrom<String> for Period {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(p: Period) -> Self {
        p.to_string()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            TimeUnit::Days => 'D',
            TimeUnit::Weeks => 'W',
            TimeUnit::Months => 'M',
            TimeUnit::Years => 'Y',
        };
        write!(f, "{}{unit}", self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tenors() {
        assert_eq!("3M".parse::<Period>().unwrap(), Period::months(3));
        assert_eq!("30y".parse::<Period>().unwrap(), Period::years(30));
        assert_eq!("2W".parse::<Period>().unwrap(), Period::new(2, TimeUnit::Weeks));
        assert!("M3".parse::<Period>().is_err());
        assert!("3Q".parse::<Period>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Period::years(10).to_string(), "10Y");
    }
}
