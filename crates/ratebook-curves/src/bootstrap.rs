//! Sequential bootstrap of a piecewise forward curve.
//!
//! Helpers are sorted by pillar date. Each pillar's forward is solved with
//! Brent so that the helper's implied quote matches its market quote, with
//! every earlier pillar held fixed.

use ratebook_core::daycounts::DayCountConvention;
use ratebook_core::types::Date;
use tracing::debug;

use crate::curve::{ForwardInterpolation, PiecewiseForwardCurve};
use crate::error::{CurveError, CurveResult};
use crate::helpers::{
    DepositRateHelper, EuriborConventions, RateHelper, SwapConventions, SwapRateHelper,
};
use crate::quotes::CurveQuotes;
use crate::solver::{brent, SolverConfig};

/// Configuration for the bootstrap.
#[derive(Debug, Clone, Copy)]
pub struct BootstrapConfig {
    /// Interpolation of forwards between pillars.
    pub interpolation: ForwardInterpolation,
    /// Day count of curve time.
    pub day_count: DayCountConvention,
    /// Conventions of the deposits and of the swaps' floating index.
    pub index: EuriborConventions,
    /// Conventions of the swaps' fixed leg.
    pub swap: SwapConventions,
    /// Root-finder settings.
    pub solver: SolverConfig,
    /// Search interval for each pillar forward.
    pub bracket: (f64, f64),
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            interpolation: ForwardInterpolation::LinearForward,
            day_count: DayCountConvention::Actual360,
            index: EuriborConventions::default(),
            swap: SwapConventions::default(),
            solver: SolverConfig::default(),
            bracket: (-0.2, 1.0),
        }
    }
}

/// Builds a [`PiecewiseForwardCurve`] from deposit and swap quotes.
///
/// ```rust
/// use ratebook_core::types::Date;
/// use ratebook_curves::prelude::*;
///
/// let today = Date::from_ymd(2025, 2, 13).unwrap();
/// let curve = CurveBootstrapper::new(today)
///     .bootstrap(&CurveQuotes::euribor_default())
///     .unwrap();
/// assert_eq!(curve.discount(today), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct CurveBootstrapper {
    reference_date: Date,
    config: BootstrapConfig,
}

impl CurveBootstrapper {
    /// Creates a bootstrapper anchored at `reference_date`.
    #[must_use]
    pub fn new(reference_date: Date) -> Self {
        Self {
            reference_date,
            config: BootstrapConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: BootstrapConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the forward interpolation.
    #[must_use]
    pub fn with_interpolation(mut self, interpolation: ForwardInterpolation) -> Self {
        self.config.interpolation = interpolation;
        self
    }

    /// Turns quotes into rate helpers sorted by pillar date.
    pub fn helpers(&self, quotes: &CurveQuotes) -> CurveResult<Vec<Box<dyn RateHelper>>> {
        let mut helpers: Vec<Box<dyn RateHelper>> = Vec::with_capacity(quotes.len());
        for q in &quotes.deposits {
            helpers.push(Box::new(DepositRateHelper::new(
                *q,
                self.reference_date,
                &self.config.index,
            )?));
        }
        for q in &quotes.swaps {
            helpers.push(Box::new(SwapRateHelper::new(
                *q,
                self.reference_date,
                &self.config.index,
                &self.config.swap,
            )?));
        }
        helpers.sort_by_key(|h| h.pillar_date());

        for pair in helpers.windows(2) {
            if pair[0].pillar_date() == pair[1].pillar_date() {
                return Err(CurveError::invalid_quote(
                    pair[1].label(),
                    format!("shares pillar {} with {}", pair[1].pillar_date(), pair[0].label()),
                ));
            }
        }
        Ok(helpers)
    }

    /// Bootstraps the curve.
    pub fn bootstrap(&self, quotes: &CurveQuotes) -> CurveResult<PiecewiseForwardCurve> {
        if quotes.is_empty() {
            return Err(CurveError::NoQuotes);
        }
        let helpers = self.helpers(quotes)?;

        let mut curve = PiecewiseForwardCurve::new(
            self.reference_date,
            self.config.day_count,
            self.config.interpolation,
        );
        let (lower, upper) = self.config.bracket;

        for helper in &helpers {
            curve.push_pillar(helper.pillar_date(), helper.quote())?;
            let base = curve.clone();
            let objective = |forward: f64| {
                let mut trial = base.clone();
                trial.set_last_forward(forward);
                helper.implied_quote(&trial) - helper.quote()
            };
            let solved = brent(objective, lower, upper, &self.config.solver)
                .map_err(|e| CurveError::bootstrap_failed(helper.label(), e.to_string()))?;
            curve.set_last_forward(solved.root);

            debug!(
                pillar = %helper.pillar_date(),
                instrument = %helper.label(),
                quote = helper.quote(),
                forward = solved.root,
                iterations = solved.iterations,
                "solved curve pillar"
            );
        }

        Ok(curve)
    }
}
