//! Floating-rate note valuation on a bootstrapped EURIBOR curve.

use approx::assert_relative_eq;
use ratebook_bonds::prelude::*;
use ratebook_core::types::Date;
use ratebook_curves::{ForwardInterpolation, YieldTermStructure};

fn d(y: i32, m: u32, day: u32) -> Date {
    Date::from_ymd(y, m, day).unwrap()
}

#[test]
fn forecast_fixing_without_spread_prices_at_par() {
    let valuation = d(2025, 2, 13);
    let first = price_floating_note(&FloatingNoteRequest::new(valuation)).unwrap();
    let forecast = first
        .bond
        .index()
        .forecast(first.required_fixings[0])
        .unwrap();

    let mut request = FloatingNoteRequest::new(valuation);
    request.terms = FloatingCouponTerms::with_spread(0.0);
    request.fixing_rate = forecast;
    let report = price_floating_note(&request).unwrap();

    let v = &report.valuation;
    assert_relative_eq!(v.npv, 1_000_000.0, max_relative = 1e-9);
    assert_relative_eq!(v.clean_price, 100.0, epsilon = 0.01);
}

#[test]
fn breakdown_reprices_the_npv() {
    let report = price_floating_note(&FloatingNoteRequest::new(d(2025, 2, 13))).unwrap();
    let curve = report.engine.discount_curve();
    let mut total = 0.0;
    for flow in &report.valuation.cash_flows {
        assert_relative_eq!(flow.discount_factor, curve.discount(flow.date));
        assert_relative_eq!(flow.present_value, flow.amount * flow.discount_factor);
        total += flow.present_value;
    }
    assert_relative_eq!(total, report.valuation.npv, epsilon = 1e-6);
}

#[test]
fn caps_and_floors_bound_coupons() {
    let valuation = d(2025, 2, 13);
    let mut request = FloatingNoteRequest::new(valuation);
    request.terms.caps = vec![0.02];
    let capped = price_floating_note(&request).unwrap();

    let face = request.face_value;
    for flow in capped.valuation.cash_flows.iter().filter(|f| f.kind == CashFlowKind::FloatingCoupon) {
        // At most 2% over a quarter of at most 92 days
        assert!(flow.amount <= face * 0.02 * 92.0 / 360.0 + 1e-6);
    }

    let uncapped = price_floating_note(&FloatingNoteRequest::new(valuation)).unwrap();
    assert!(capped.valuation.npv < uncapped.valuation.npv);
}

#[test]
fn interpolation_choice_changes_little() {
    let valuation = d(2025, 2, 13);
    let linear = price_floating_note(&FloatingNoteRequest::new(valuation)).unwrap();
    let mut request = FloatingNoteRequest::new(valuation);
    request.interpolation = ForwardInterpolation::FlatForward;
    let flat = price_floating_note(&request).unwrap();
    assert!((linear.valuation.clean_price - flat.valuation.clean_price).abs() < 0.05);
}

#[test]
fn zero_curve_export_spans_thirty_years() {
    let report = price_floating_note(&FloatingNoteRequest::new(d(2025, 2, 13))).unwrap();
    let first = report.zero_curve.first().unwrap();
    let last = report.zero_curve.last().unwrap();
    assert_eq!(first.date, d(2025, 3, 13));
    assert_eq!(last.date, d(2055, 2, 13));
    assert!(report.zero_curve.iter().all(|p| p.rate > 0.0 && p.rate < 0.05));
}

#[test]
fn explicit_maturity_in_the_past_is_rejected() {
    let mut request = FloatingNoteRequest::new(d(2025, 2, 13));
    request.issue_date = Some(d(2024, 1, 10));
    request.maturity_date = Some(d(2025, 1, 10));
    assert!(matches!(
        price_floating_note(&request),
        Err(BondError::InvalidSpec { .. })
    ));
}
