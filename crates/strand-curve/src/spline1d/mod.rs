//! One-dimensional interpolating splines over scalar knots.
//!
//! Knots sit at integer parameters `0..N-1` (the control-point indices); a 3D
//! curve is built from three independent axis splines sharing that parameter.

mod cardinal;
mod kochanek;
mod tridiagonal;

use serde::{Deserialize, Serialize};

pub use cardinal::CardinalSpline1d;
pub use kochanek::{KochanekShape, KochanekSpline1d};

/// Trait for 1D splines evaluated over a scalar knot parameter.
pub trait Spline1d {
    /// Evaluate the spline at parameter `t`.
    fn evaluate(&self, t: f64) -> f64;

    /// Return the parameter domain `(t_min, t_max)`.
    ///
    /// Closed splines wrap: the interval from the last knot back to the first
    /// is part of the domain.
    fn domain(&self) -> (f64, f64);
}

/// End-derivative policy for open splines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EndDerivatives {
    /// Each end slope is taken from the nearest two knots.
    Automatic,
    /// Explicit slopes at the first and last knot.
    Pinned { start: f64, end: f64 },
}

impl EndDerivatives {
    /// Resolve the policy to concrete `(start, end)` slopes for `values`.
    fn resolve(self, values: &[f64]) -> (f64, f64) {
        let n = values.len();
        match self {
            EndDerivatives::Automatic => (values[1] - values[0], values[n - 1] - values[n - 2]),
            EndDerivatives::Pinned { start, end } => (start, end),
        }
    }
}

/// Cubic Hermite basis over one unit interval.
fn hermite(y0: f64, m0: f64, y1: f64, m1: f64, u: f64) -> f64 {
    let u2 = u * u;
    let u3 = u2 * u;
    (2.0 * u3 - 3.0 * u2 + 1.0) * y0
        + (u3 - 2.0 * u2 + u) * m0
        + (-2.0 * u3 + 3.0 * u2) * y1
        + (u3 - u2) * m1
}

/// Locate the interval and local offset for parameter `t`.
///
/// Open splines clamp `t` into `[0, n-1]`; closed splines wrap it into
/// `[0, n)` where interval `n-1` runs from the last knot back to the first.
fn locate(t: f64, n: usize, closed: bool) -> (usize, usize, f64) {
    if closed {
        let span = n as f64;
        let t = t.rem_euclid(span);
        let i = (t.floor() as usize).min(n - 1);
        (i, (i + 1) % n, t - i as f64)
    } else {
        let t = t.clamp(0.0, (n - 1) as f64);
        let i = (t.floor() as usize).min(n - 2);
        (i, i + 1, t - i as f64)
    }
}
