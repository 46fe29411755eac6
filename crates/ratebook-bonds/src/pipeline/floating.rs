//! EURIBOR curve bootstrap and floating-rate note valuation.

use ratebook_core::calendars::BusinessDayConvention;
use ratebook_core::types::{Date, Frequency, Period};
use ratebook_curves::{
    CurveBootstrapper, CurveQuotes, ForwardInterpolation, YieldTermStructure, ZeroRatePoint,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::builder::InstrumentBuilder;
use crate::error::{BondError, BondResult};
use crate::index::IborIndex;
use crate::instruments::{Bond, FloatingCouponTerms, FloatingRateBond};
use crate::pricing::{BondValuation, DiscountingBondEngine};
use crate::schedule::{Schedule, ScheduleConfig};

/// Inputs of a floating-rate note valuation.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingNoteRequest {
    /// Valuation date and curve reference date.
    pub valuation_date: Date,
    /// Deposit and swap quotes.
    pub quotes: CurveQuotes,
    /// Forward interpolation of the bootstrapped curve.
    pub interpolation: ForwardInterpolation,
    /// Face value.
    pub face_value: f64,
    /// Issue date; the valuation date when absent.
    pub issue_date: Option<Date>,
    /// Maturity; issue date plus `tenor` when absent.
    pub maturity_date: Option<Date>,
    /// Life of the note from issue.
    pub tenor: Period,
    /// Coupon frequency.
    pub frequency: Frequency,
    /// Settlement days, also the index fixing lag.
    pub settlement_days: u32,
    /// Gearing, spread, cap and floor lists.
    pub terms: FloatingCouponTerms,
    /// Historical fixing registered before pricing.
    pub fixing_rate: f64,
    /// Date of that fixing; the first past fixing date when absent.
    pub fixing_date: Option<Date>,
    /// Number of monthly zero-rate samples to report.
    pub zero_curve_points: u32,
}

impl FloatingNoteRequest {
    /// A one-year quarterly note at EURIBOR 3M + 1% on the default strip.
    pub fn new(valuation_date: Date) -> Self {
        Self {
            valuation_date,
            quotes: CurveQuotes::euribor_default(),
            interpolation: ForwardInterpolation::LinearForward,
            face_value: 1_000_000.0,
            issue_date: None,
            maturity_date: None,
            tenor: Period::years(1),
            frequency: Frequency::Quarterly,
            settlement_days: 2,
            terms: FloatingCouponTerms::with_spread(0.01),
            fixing_rate: 0.0238,
            fixing_date: None,
            zero_curve_points: 360,
        }
    }
}

/// Result of [`price_floating_note`].
#[derive(Debug, Clone, Serialize)]
pub struct FloatingNoteReport {
    /// Fixing date of every coupon.
    pub required_fixings: Vec<Date>,
    /// Historical fixing registered on the index, if any.
    pub registered_fixing: Option<(Date, f64)>,
    /// Monthly continuous Actual/360 zero rates.
    pub zero_curve: Vec<ZeroRatePoint>,
    /// NPV, prices and cash-flow breakdown.
    pub valuation: BondValuation,
    /// The priced bond.
    #[serde(skip)]
    pub bond: FloatingRateBond,
    /// The engine that discounted it.
    #[serde(skip)]
    pub engine: DiscountingBondEngine,
}

/// Bootstraps the curve, builds the note on it and values it.
///
/// The bootstrapped curve is shared between the index and the engine.
pub fn price_floating_note(request: &FloatingNoteRequest) -> BondResult<FloatingNoteReport> {
    let valuation_date = request.valuation_date;
    let curve = CurveBootstrapper::new(valuation_date)
        .with_interpolation(request.interpolation)
        .bootstrap(&request.quotes)?;
    info!(
        %valuation_date,
        pillars = curve.pillar_dates().len(),
        interpolation = %curve.interpolation(),
        "bootstrapped curve"
    );
    let zero_curve = curve.sample_zero_rates(Period::months(1), request.zero_curve_points)?;
    let curve: Arc<dyn YieldTermStructure> = Arc::new(curve);

    let issue = request.issue_date.unwrap_or(valuation_date);
    let maturity = match request.maturity_date {
        Some(date) => date,
        None => issue.add_period(request.tenor)?,
    };
    if maturity <= valuation_date {
        return Err(BondError::invalid_spec(format!(
            "maturity {maturity} is not after valuation date {valuation_date}"
        )));
    }

    let index = IborIndex::euribor_3m(Arc::clone(&curve));
    let config = ScheduleConfig::new(issue, maturity, request.frequency)
        .with_calendar(index.conventions().calendar)
        .with_business_day_convention(BusinessDayConvention::ModifiedFollowing);
    let schedule = Schedule::generate(config)?;

    let mut bond = InstrumentBuilder::default().floating_rate_bond(
        schedule,
        request.face_value,
        index,
        request.terms.clone(),
        request.settlement_days,
    )?;

    let required_fixings = bond.required_fixing_dates();
    for date in &required_fixings {
        debug!(fixing_date = %date, "fixing required");
    }
    let fixing_date = request.fixing_date.or_else(|| {
        required_fixings
            .iter()
            .copied()
            .find(|d| *d < valuation_date)
    });
    let registered_fixing = fixing_date.map(|date| {
        bond.index_mut().add_fixing(date, request.fixing_rate);
        (date, request.fixing_rate)
    });

    let engine = DiscountingBondEngine::new(curve);
    let valuation = engine.value(&bond, valuation_date)?;
    info!(
        npv = valuation.npv,
        clean = valuation.clean_price,
        dirty = valuation.dirty_price,
        maturity = %bond.maturity(),
        "valued floating rate note"
    );

    Ok(FloatingNoteReport {
        required_fixings,
        registered_fixing,
        zero_curve,
        valuation,
        bond,
        engine,
    })
}
