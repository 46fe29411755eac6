//! # Ratebook Curves
//!
//! Bootstraps single-curve EURIBOR term structures from deposit and swap
//! quotes.
//!
//! - [`quotes`]: `(tenor, rate)` market quotes and the default EURIBOR strip
//! - [`helpers`]: deposit and par-swap rate helpers that reprice against a trial curve
//! - [`curve`]: piecewise instantaneous-forward curve on Actual/360 time
//! - [`bootstrap`]: sequential pillar-by-pillar solve using [`solver::brent`]
//!
//! The resulting curve implements [`YieldTermStructure`] and is meant to be
//! shared behind an `Arc` between an index and a pricing engine.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]

pub mod bootstrap;
pub mod curve;
pub mod error;
pub mod helpers;
pub mod quotes;
pub mod solver;
pub mod term_structure;

pub use bootstrap::{BootstrapConfig, CurveBootstrapper};
pub use curve::{ForwardInterpolation, PiecewiseForwardCurve, ZeroRatePoint};
pub use error::{CurveError, CurveResult};
pub use helpers::{DepositRateHelper, EuriborConventions, RateHelper, SwapRateHelper};
pub use quotes::{CurveQuotes, RateQuote};
pub use term_structure::YieldTermStructure;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{BootstrapConfig, CurveBootstrapper};
    pub use crate::curve::{ForwardInterpolation, PiecewiseForwardCurve};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::quotes::{CurveQuotes, RateQuote};
    pub use crate::term_structure::YieldTermStructure;
}
