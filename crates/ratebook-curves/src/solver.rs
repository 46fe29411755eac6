//! Brent's root-finding method.

use crate::error::{CurveError, CurveResult};

/// Solver configuration.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Absolute tolerance on the root and on the objective.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 100,
        }
    }
}

/// Root and iteration statistics.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Objective value at the root.
    pub residual: f64,
}

/// Brent's method: bisection safeguarded by secant and inverse quadratic steps.
///
/// Requires `f(lower)` and `f(upper)` to have opposite signs.
///
/// ```rust
/// use ratebook_curves::solver::{brent, SolverConfig};
///
/// let r = brent(|x| x * x - 2.0, 0.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((r.root - 2f64.sqrt()).abs() < 1e-10);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn brent<F>(f: F, lower: f64, upper: f64, config: &SolverConfig) -> CurveResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let (mut a, mut b) = (lower, upper);
    let (mut fa, mut fb) = (f(a), f(b));

    if fa == 0.0 {
        return Ok(SolverResult { root: a, iterations: 0, residual: 0.0 });
    }
    if fb == 0.0 {
        return Ok(SolverResult { root: b, iterations: 0, residual: 0.0 });
    }
    if fa * fb > 0.0 {
        return Err(CurveError::InvalidBracket {
            lower,
            upper,
            f_lower: fa,
            f_upper: fb,
        });
    }

    let (mut c, mut fc) = (b, fb);
    let mut d = b - a;
    let mut e = d;

    for iteration in 1..=config.max_iterations {
        // Keep the root between b and c
        if (fb > 0.0) == (fc > 0.0) {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * config.tolerance;
        let m = 0.5 * (c - b);
        if m.abs() <= tol || fb.abs() < config.tolerance {
            return Ok(SolverResult { root: b, iterations: iteration, residual: fb });
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (2.0 * m * s, 1.0 - s)
            } else {
                let q0 = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * m * q0 * (q0 - r) - (b - a) * (r - 1.0)),
                    (q0 - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            } else {
                p = -p;
            }
            let min1 = 3.0 * m * q - (tol * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = m;
                e = d;
            }
        } else {
            d = m;
            e = d;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol { d } else { tol.copysign(m) };
        fb = f(b);
    }

    Err(CurveError::ConvergenceFailed {
        iterations: config.max_iterations,
        residual: fb,
    })
}
