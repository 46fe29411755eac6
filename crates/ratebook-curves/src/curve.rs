//! Piecewise instantaneous-forward curve.
//!
//! Nodes are `(t_i, f_i)` with `t_0 = 0`. Discount factors integrate the
//! forward curve: `DF(t) = exp(-∫ f)`. Before the first pillar the forward is
//! flat at the first pillar's value; after the last pillar it stays flat.

use ratebook_core::daycounts::DayCountConvention;
use ratebook_core::types::{Compounding, Date, Period};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CurveError, CurveResult};
use crate::term_structure::YieldTermStructure;

/// How forwards are interpolated between pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ForwardInterpolation {
    /// Forwards linear in time between pillars.
    #[default]
    LinearForward,
    /// Forward constant on each interval, equal to the value at its right pillar.
    FlatForward,
}

impl fmt::Display for ForwardInterpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForwardInterpolation::LinearForward => write!(f, "linear-forward"),
            ForwardInterpolation::FlatForward => write!(f, "flat-forward"),
        }
    }
}

impl FromStr for ForwardInterpolation {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "linear-forward" | "linear" => Ok(ForwardInterpolation::LinearForward),
            "flat-forward" | "flat" => Ok(ForwardInterpolation::FlatForward),
            other => Err(CurveError::invalid_quote(
                other,
                "interpolation must be linear-forward or flat-forward",
            )),
        }
    }
}

/// One sample of a zero-rate curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZeroRatePoint {
    /// Sample date.
    pub date: Date,
    /// Curve time in years.
    pub time: f64,
    /// Continuously compounded zero rate.
    pub rate: f64,
}

/// A bootstrapped curve of instantaneous forwards.
#[derive(Debug, Clone)]
pub struct PiecewiseForwardCurve {
    reference_date: Date,
    day_count: DayCountConvention,
    interpolation: ForwardInterpolation,
    dates: Vec<Date>,
    times: Vec<f64>,
    forwards: Vec<f64>,
}

impl PiecewiseForwardCurve {
    /// Creates an empty curve holding only its reference node.
    #[must_use]
    pub fn new(
        reference_date: Date,
        day_count: DayCountConvention,
        interpolation: ForwardInterpolation,
    ) -> Self {
        Self {
            reference_date,
            day_count,
            interpolation,
            dates: vec![reference_date],
            times: vec![0.0],
            forwards: vec![0.0],
        }
    }

    /// Appends a pillar. Times must be strictly increasing.
    pub fn push_pillar(&mut self, date: Date, forward: f64) -> CurveResult<()> {
        let t = self.day_count.time(self.reference_date, date);
        let last = self.times.last().copied().unwrap_or(0.0);
        if t <= last {
            return Err(CurveError::bootstrap_failed(
                date.to_string(),
                "pillar does not extend the curve",
            ));
        }
        self.dates.push(date);
        self.times.push(t);
        self.forwards.push(forward);
        self.sync_front();
        Ok(())
    }

    /// Overwrites the forward of the last pillar.
    pub fn set_last_forward(&mut self, forward: f64) {
        if let Some(last) = self.forwards.last_mut() {
            *last = forward;
        }
        self.sync_front();
    }

    /// Pillar dates, excluding the reference node.
    pub fn pillar_dates(&self) -> &[Date] {
        &self.dates[1..]
    }

    /// `(date, forward)` pairs for every pillar.
    pub fn pillars(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.dates.iter().copied().zip(self.forwards.iter().copied()).skip(1)
    }

    /// Interpolation in use.
    pub fn interpolation(&self) -> ForwardInterpolation {
        self.interpolation
    }

    /// Last pillar date.
    pub fn max_date(&self) -> Date {
        self.dates.last().copied().unwrap_or(self.reference_date)
    }

    /// Instantaneous forward at curve time `t`.
    pub fn forward_at(&self, t: f64) -> f64 {
        let n = self.times.len();
        if n == 1 {
            return 0.0;
        }
        if t >= self.times[n - 1] {
            return self.forwards[n - 1];
        }
        let i = self.segment(t);
        match self.interpolation {
            ForwardInterpolation::FlatForward => self.forwards[i],
            ForwardInterpolation::LinearForward => {
                let (t0, t1) = (self.times[i - 1], self.times[i]);
                let (f0, f1) = (self.forwards[i - 1], self.forwards[i]);
                f0 + (f1 - f0) * (t - t0) / (t1 - t0)
            }
        }
    }

    /// Samples continuously compounded zero rates at regular steps.
    pub fn sample_zero_rates(&self, step: Period, count: u32) -> CurveResult<Vec<ZeroRatePoint>> {
        let mut points = Vec::with_capacity(count as usize);
        for k in 1..=count {
            let offset = Period::new(step.length * k as i32, step.unit);
            let date = self.reference_date.add_period(offset)?;
            points.push(ZeroRatePoint {
                date,
                time: self.time_from_reference(date),
                rate: self.zero_rate(date, Compounding::Continuous),
            });
        }
        Ok(points)
    }

    /// Index of the segment `(t_{i-1}, t_i]` containing `t`, for `0 < t < t_max`.
    fn segment(&self, t: f64) -> usize {
        self.times
            .iter()
            .position(|&ti| ti >= t)
            .unwrap_or(self.times.len() - 1)
            .max(1)
    }

    /// The reference node mirrors the first pillar's forward.
    fn sync_front(&mut self) {
        if self.forwards.len() > 1 {
            self.forwards[0] = self.forwards[1];
        }
    }

    /// Integral of the forward curve from 0 to `t`.
    fn integrated_forward(&self, t: f64) -> f64 {
        let n = self.times.len();
        let mut total = 0.0;
        for i in 1..n {
            let (t0, t1) = (self.times[i - 1], self.times[i]);
            if t <= t0 {
                return total;
            }
            let upper = t.min(t1);
            total += match self.interpolation {
                ForwardInterpolation::FlatForward => self.forwards[i] * (upper - t0),
                ForwardInterpolation::LinearForward => {
                    let f_upper = self.forward_at(upper);
                    0.5 * (self.forwards[i - 1] + f_upper) * (upper - t0)
                }
            };
        }
        let t_max = self.times[n - 1];
        if t > t_max {
            total += self.forwards[n - 1] * (t - t_max);
        }
        total
    }
}

impl YieldTermStructure for PiecewiseForwardCurve {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    fn discount_time(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        (-self.integrated_forward(t)).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn two_pillar_curve(interp: ForwardInterpolation) -> PiecewiseForwardCurve {
        let mut c = PiecewiseForwardCurve::new(d(2025, 1, 2), DayCountConvention::Actual360, interp);
        c.push_pillar(d(2025, 7, 1), 0.02).unwrap();
        c.push_pillar(d(2026, 6, 26), 0.03).unwrap();
        c
    }

    #[test]
    fn test_discount_at_reference_is_one() {
        let c = two_pillar_curve(ForwardInterpolation::LinearForward);
        assert_eq!(c.discount(d(2025, 1, 2)), 1.0);
    }

    #[test]
    fn test_flat_front_segment() {
        let c = two_pillar_curve(ForwardInterpolation::LinearForward);
        // 90 days at a flat 2% forward
        assert_relative_eq!(
            c.discount(d(2025, 4, 2)),
            (-0.02 * 90.0 / 360.0f64).exp(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_linear_segment_integral() {
        let c = two_pillar_curve(ForwardInterpolation::LinearForward);
        let t1 = 180.0 / 360.0;
        let t2 = 540.0 / 360.0;
        let expected = 0.02 * t1 + 0.5 * (0.02 + 0.03) * (t2 - t1);
        assert_relative_eq!(c.discount_time(t2), (-expected).exp(), epsilon = 1e-14);
        assert_relative_eq!(c.forward_at(1.0), 0.025, epsilon = 1e-14);
    }

    #[test]
    fn test_flat_forward_uses_right_pillar() {
        let c = two_pillar_curve(ForwardInterpolation::FlatForward);
        assert_relative_eq!(c.forward_at(1.0), 0.03);
        assert_relative_eq!(c.forward_at(0.2), 0.02);
    }

    #[test]
    fn test_flat_extrapolation() {
        let c = two_pillar_curve(ForwardInterpolation::LinearForward);
        assert_relative_eq!(c.forward_at(10.0), 0.03);
    }

    #[test]
    fn test_rejects_unordered_pillar() {
        let mut c = two_pillar_curve(ForwardInterpolation::LinearForward);
        assert!(c.push_pillar(d(2025, 3, 1), 0.01).is_err());
    }

    #[test]
    fn test_zero_rate_continuous() {
        let c = two_pillar_curve(ForwardInterpolation::FlatForward);
        let z = c.zero_rate(d(2025, 4, 2), Compounding::Continuous);
        assert_relative_eq!(z, 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolation_parse() {
        assert_eq!(
            "flat_forward".parse::<ForwardInterpolation>().unwrap(),
            ForwardInterpolation::FlatForward
        );
        assert!("cubic".parse::<ForwardInterpolation>().is_err());
    }
}
