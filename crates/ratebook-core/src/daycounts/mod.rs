//! Day count conventions for fixed income calculations.
//!
//! # Supported Conventions
//!
//! - [`Act360`]: Actual/360, money-market and EURIBOR accruals
//! - [`Act365Fixed`]: Actual/365 Fixed
//! - [`ActActIsma`]: Actual/Actual ISMA, reference-period based (government bonds)
//! - [`ActActBond`]: Actual/Actual Bond, the same period rule under the bond-market name
//! - [`Thirty360Eurobond`]: 30E/360 Eurobond basis
//!
//! [`DayCountConvention`] is the serializable identifier used by market
//! conventions and configuration files.

mod actact;
mod actual;
mod thirty360;

pub use actact::{ActActBond, ActActIsma};
pub use actual::{Act360, Act365Fixed};
pub use thirty360::Thirty360Eurobond;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::{normalize_name, Date};

/// Trait for day count conventions.
pub trait DayCount: Send + Sync {
    /// Returns the market name of the convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the year fraction inside a coupon reference period.
    ///
    /// Conventions that ignore the reference period fall back to
    /// [`DayCount::year_fraction`].
    fn year_fraction_in_period(
        &self,
        start: Date,
        end: Date,
        _ref_start: Date,
        _ref_end: Date,
    ) -> Decimal {
        self.year_fraction(start, end)
    }

    /// Counts days between two dates according to the convention.
    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Identifier for the supported day count conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DayCountConvention {
    /// Actual/360
    Actual360,
    /// Actual/365 Fixed
    Actual365Fixed,
    /// Actual/Actual ISMA
    ActualActualIsma,
    /// Actual/Actual Bond
    ActualActualBond,
    /// 30E/360 Eurobond basis
    Thirty360Eurobond,
}

impl DayCountConvention {
    /// Returns the implementation for this convention.
    #[must_use]
    pub fn day_count(self) -> &'static dyn DayCount {
        match self {
            DayCountConvention::Actual360 => &Act360,
            DayCountConvention::Actual365Fixed => &Act365Fixed,
            DayCountConvention::ActualActualIsma => &ActActIsma,
            DayCountConvention::ActualActualBond => &ActActBond,
            DayCountConvention::Thirty360Eurobond => &Thirty360Eurobond,
        }
    }

    /// Year fraction as `f64`, for discounting arithmetic.
    #[must_use]
    pub fn time(self, start: Date, end: Date) -> f64 {
        self.day_count()
            .year_fraction(start, end)
            .to_f64()
            .unwrap_or(0.0)
    }

    /// Reference-period year fraction as `f64`.
    #[must_use]
    pub fn time_in_period(self, start: Date, end: Date, ref_start: Date, ref_end: Date) -> f64 {
        self.day_count()
            .year_fraction_in_period(start, end, ref_start, ref_end)
            .to_f64()
            .unwrap_or(0.0)
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.day_count().name())
    }
}

impl FromStr for DayCountConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "ACTUAL360" | "ACT360" => Ok(DayCountConvention::Actual360),
            "ACTUAL365" | "ACTUAL365FIXED" | "ACT365" | "ACT365F" | "ACT365FIXED" => {
                Ok(DayCountConvention::Actual365Fixed)
            }
            "ACTUALACTUALISMA" | "ACTACTISMA" | "ACTUALACTUALICMA" | "ACTACTICMA" => {
                Ok(DayCountConvention::ActualActualIsma)
            }
            "ACTUALACTUALBOND" | "ACTACTBOND" => Ok(DayCountConvention::ActualActualBond),
            "THIRTY360EUROBOND" | "30360EUROBOND" | "30E360" => {
                Ok(DayCountConvention::Thirty360Eurobond)
            }
            _ => Err(CoreError::unknown("day count", s)),
        }
    }
}

impl TryFrom<String> for DayCountConvention {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
