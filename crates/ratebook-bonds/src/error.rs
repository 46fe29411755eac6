//! Error types for bond operations.

use ratebook_core::{types::Date, CoreError};
use ratebook_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur while resolving, building or pricing bonds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// No convention alias occurs in the identifier.
    #[error("No market convention matches '{identifier}'")]
    UnresolvedCountry {
        /// The bond name or country identifier.
        identifier: String,
    },

    /// The bond name does not contain a term.
    #[error("Cannot extract a term from '{name}' using pattern {pattern}")]
    InvalidTermFormat {
        /// The bond name.
        name: String,
        /// The term pattern in use.
        pattern: String,
    },

    /// A coupon fixed before the valuation date has no stored fixing.
    #[error("Missing {index} fixing for {fixing_date}")]
    MissingFixing {
        /// Index name.
        index: String,
        /// Fixing date without a value.
        fixing_date: Date,
    },

    /// An input field could not be parsed.
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidField {
        /// Field name.
        field: String,
        /// Raw value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Schedule generation failed.
    #[error("Schedule generation failed: {reason}")]
    ScheduleFailed {
        /// Description of the failure.
        reason: String,
    },

    /// Settlement falls on or after maturity.
    #[error("Settlement date {settlement} is not before maturity {maturity}")]
    SettlementAfterMaturity {
        /// Settlement date.
        settlement: Date,
        /// Maturity date.
        maturity: Date,
    },

    /// Date, calendar or day count failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Curve construction failure.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates an invalid field error.
    #[must_use]
    pub fn invalid_field(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates a schedule failure.
    #[must_use]
    pub fn schedule_failed(reason: impl Into<String>) -> Self {
        Self::ScheduleFailed {
            reason: reason.into(),
        }
    }
}
