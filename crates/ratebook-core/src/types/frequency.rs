//! Frequency and compounding types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Coupon payment frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum Frequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year)
    #[default]
    SemiAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Monthly payments (12 per year)
    Monthly,
}

impl Frequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Frequency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "ANNUAL" | "1Y" | "12M" => Ok(Frequency::Annual),
            "SEMIANNUAL" | "6M" => Ok(Frequency::SemiAnnual),
            "QUARTERLY" | "3M" => Ok(Frequency::Quarterly),
            "MONTHLY" | "1M" => Ok(Frequency::Monthly),
            _ => Err(CoreError::unknown("frequency", s)),
        }
    }
}

impl TryFrom<String> for Frequency {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Interest compounding convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compounding {
    /// Simple interest: `1 / (1 + r t)`.
    Simple,
    /// Periodic compounding at the given frequency: `(1 + r/f)^(-f t)`.
    Compounded(Frequency),
    /// Continuous compounding: `exp(-r t)`.
    Continuous,
}

impl Compounding {
    /// Discount factor for rate `rate` over `t` years.
    #[must_use]
    pub fn discount_factor(&self, rate: f64, t: f64) -> f64 {
        match self {
            Compounding::Simple => 1.0 / (1.0 + rate * t),
            Compounding::Compounded(freq) => {
                let f = f64::from(freq.periods_per_year());
                (1.0 + rate / f).powf(-f * t)
            }
            Compounding::Continuous => (-rate * t).exp(),
        }
    }

    /// Rate implied by discount factor `df` over `t` years.
    #[must_use]
    pub fn implied_rate(&self, df: f64, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        match self {
            Compounding::Simple => (1.0 / df - 1.0) / t,
            Compounding::Compounded(freq) => {
                let f = f64::from(freq.periods_per_year());
                f * (df.powf(-1.0 / (f * t)) - 1.0)
            }
            Compounding::Continuous => -df.ln() / t,
        }
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compounding::Simple => write!(f, "Simple"),
            Compounding::Compounded(freq) => write!(f, "Compounded ({freq})"),
            Compounding::Continuous => write!(f, "Continuous"),
        }
    }
}

/// Uppercases and strips everything but letters and digits.
pub(crate) fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
