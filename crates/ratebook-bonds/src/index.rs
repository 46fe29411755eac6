//! Interest rate indices with historical fixings and curve forecasting.

use ratebook_core::types::{Date, Period};
use ratebook_curves::{EuriborConventions, YieldTermStructure};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::error::{BondError, BondResult};

/// An IBOR-style index forecasting from a shared curve.
///
/// Fixings made before the valuation date must be stored; a fixing on the
/// valuation date uses the stored value when one exists and otherwise
/// forecasts, as do all later fixings.
#[derive(Clone)]
pub struct IborIndex {
    name: String,
    tenor: Period,
    conventions: EuriborConventions,
    curve: Arc<dyn YieldTermStructure>,
    fixings: BTreeMap<Date, f64>,
}

impl IborIndex {
    /// Creates an index with explicit tenor and conventions.
    pub fn new(
        name: impl Into<String>,
        tenor: Period,
        conventions: EuriborConventions,
        curve: Arc<dyn YieldTermStructure>,
    ) -> Self {
        Self {
            name: name.into(),
            tenor,
            conventions,
            curve,
            fixings: BTreeMap::new(),
        }
    }

    /// EURIBOR 3M on TARGET, Actual/360, two fixing days.
    pub fn euribor_3m(curve: Arc<dyn YieldTermStructure>) -> Self {
        Self::new(
            "Euribor3M",
            Period::months(3),
            EuriborConventions::default(),
            curve,
        )
    }

    /// Index name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index tenor.
    pub fn tenor(&self) -> Period {
        self.tenor
    }

    /// Fixing conventions.
    pub fn conventions(&self) -> &EuriborConventions {
        &self.conventions
    }

    /// Curve used for forecasting.
    pub fn forwarding_curve(&self) -> &Arc<dyn YieldTermStructure> {
        &self.curve
    }

    /// Stored historical fixings.
    pub fn fixings(&self) -> &BTreeMap<Date, f64> {
        &self.fixings
    }

    /// Stores a historical fixing, replacing any previous value.
    pub fn add_fixing(&mut self, fixing_date: Date, rate: f64) {
        debug!(index = %self.name, %fixing_date, rate, "registered fixing");
        self.fixings.insert(fixing_date, rate);
    }

    /// Fixing date of an accrual period starting on `accrual_start`.
    pub fn fixing_date(&self, accrual_start: Date) -> Date {
        self.conventions.fixing_date(accrual_start)
    }

    /// Rate forecast from the curve for a fixing made on `fixing_date`.
    pub fn forecast(&self, fixing_date: Date) -> BondResult<f64> {
        let value_date = self.conventions.value_date(fixing_date);
        let maturity = self.conventions.maturity_date(value_date, self.tenor)?;
        Ok(self
            .curve
            .forward_rate(value_date, maturity, self.conventions.day_count))
    }

    /// Index rate for `fixing_date` as seen on `valuation_date`.
    pub fn fixing(&self, fixing_date: Date, valuation_date: Date) -> BondResult<f64> {
        if let Some(&rate) = self.fixings.get(&fixing_date) {
            if fixing_date <= valuation_date {
                return Ok(rate);
            }
        }
        if fixing_date < valuation_date {
            return Err(BondError::MissingFixing {
                index: self.name.clone(),
                fixing_date,
            });
        }
        self.forecast(fixing_date)
    }
}

impl fmt::Debug for IborIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IborIndex")
            .field("name", &self.name)
            .field("tenor", &self.tenor)
            .field("reference_date", &self.curve.reference_date())
            .field("fixings", &self.fixings)
            .finish()
    }
}
