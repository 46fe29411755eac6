//! Integration tests for the EURIBOR curve built from the default strip.

use approx::assert_relative_eq;
use ratebook_core::types::{Compounding, Date, Period};
use ratebook_curves::prelude::*;

fn reference() -> Date {
    Date::from_ymd(2025, 2, 13).unwrap()
}

fn curve() -> PiecewiseForwardCurve {
    CurveBootstrapper::new(reference())
        .bootstrap(&CurveQuotes::euribor_default())
        .unwrap()
}

#[test]
fn discount_factors_start_at_one_and_decrease() {
    let curve = curve();
    assert_eq!(curve.discount(reference()), 1.0);

    let mut previous = 1.0;
    for month in 1..=360 {
        let date = reference().add_months(month).unwrap();
        let df = curve.discount(date);
        assert!(df < previous, "DF not decreasing at {date}: {df} >= {previous}");
        assert!(df > 0.0);
        previous = df;
    }
}

#[test]
fn zero_rate_samples_cover_thirty_years() {
    let curve = curve();
    let points = curve.sample_zero_rates(Period::months(1), 360).unwrap();
    assert_eq!(points.len(), 360);
    assert_eq!(points[0].date, Date::from_ymd(2025, 3, 13).unwrap());
    assert_eq!(points[359].date, Date::from_ymd(2055, 2, 13).unwrap());
    for p in &points {
        assert!(p.rate > 0.0 && p.rate < 0.05, "implausible zero rate {p:?}");
    }
}

#[test]
fn short_end_matches_deposit_quotes() {
    let curve = curve();
    let spot = Date::from_ymd(2025, 2, 17).unwrap();
    let three_month = Date::from_ymd(2025, 5, 19).unwrap();
    let implied = curve.forward_rate(spot, three_month, ratebook_core::daycounts::DayCountConvention::Actual360);
    assert_relative_eq!(implied, 0.02526, epsilon = 1e-10);
}

#[test]
fn zero_rate_compounding_conventions_agree() {
    let curve = curve();
    let date = Date::from_ymd(2030, 2, 13).unwrap();
    let t = curve.time_from_reference(date);
    let cont = curve.zero_rate(date, Compounding::Continuous);
    let simple = curve.zero_rate(date, Compounding::Simple);
    assert_relative_eq!((-cont * t).exp(), 1.0 / (1.0 + simple * t), epsilon = 1e-12);
}
