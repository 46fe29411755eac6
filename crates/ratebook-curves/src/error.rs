//! Error types for curve construction.

use ratebook_core::CoreError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// No quotes were supplied.
    #[error("Cannot build a curve without quotes")]
    NoQuotes,

    /// A quote is malformed or duplicated.
    #[error("Invalid quote {tenor}: {reason}")]
    InvalidQuote {
        /// Tenor of the offending quote.
        tenor: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The root is not bracketed by the search interval.
    #[error("Root not bracketed in [{lower}, {upper}] (f = {f_lower}, {f_upper})")]
    InvalidBracket {
        /// Lower bound.
        lower: f64,
        /// Upper bound.
        upper: f64,
        /// Objective at the lower bound.
        f_lower: f64,
        /// Objective at the upper bound.
        f_upper: f64,
    },

    /// The solver exhausted its iterations.
    #[error("Convergence failed after {iterations} iterations (residual: {residual})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// A pillar could not be solved.
    #[error("Bootstrap failed at pillar {pillar}: {reason}")]
    BootstrapFailed {
        /// Pillar date or tenor.
        pillar: String,
        /// Underlying failure.
        reason: String,
    },

    /// Date or calendar failure.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Creates an invalid quote error.
    #[must_use]
    pub fn invalid_quote(tenor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidQuote {
            tenor: tenor.into(),
            reason: reason.into(),
        }
    }

    /// Creates a bootstrap failure for a pillar.
    #[must_use]
    pub fn bootstrap_failed(pillar: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BootstrapFailed {
            pillar: pillar.into(),
            reason: reason.into(),
        }
    }
}
