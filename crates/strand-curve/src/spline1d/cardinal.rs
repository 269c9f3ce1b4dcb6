//! Cardinal (C2 cubic interpolating) spline over scalar knots.

use serde::{Deserialize, Serialize};

use super::tridiagonal::{solve_cyclic_tridiagonal, solve_tridiagonal};
use super::{hermite, locate, EndDerivatives, Spline1d};

/// A C2 cubic spline interpolating scalar values at integer knots.
///
/// The fit solves for one derivative per knot: open splines use a
/// tridiagonal system with pinned end slopes, closed splines the periodic
/// (cyclic) variant, so the curve is C2 across the wrap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardinalSpline1d {
    values: Vec<f64>,
    derivatives: Vec<f64>,
    closed: bool,
}

impl CardinalSpline1d {
    /// Fit a spline through `values` at knots `0, 1, 2, ...`.
    ///
    /// Open fits need at least 2 values, closed fits at least 3. The `ends`
    /// policy only applies to open fits; closed fits derive all derivatives
    /// from the periodic system.
    pub fn fit(values: &[f64], closed: bool, ends: EndDerivatives) -> Self {
        let n = values.len();
        debug_assert!(n >= 2);
        debug_assert!(!closed || n >= 3);

        let derivatives = if closed {
            let sub = vec![1.0; n];
            let diag = vec![4.0; n];
            let sup = vec![1.0; n];
            let rhs: Vec<f64> = (0..n)
                .map(|i| 3.0 * (values[(i + 1) % n] - values[(i + n - 1) % n]))
                .collect();
            solve_cyclic_tridiagonal(&sub, &diag, &sup, &rhs, 1.0, 1.0)
        } else {
            let (start_slope, end_slope) = ends.resolve(values);
            let mut sub = vec![1.0; n];
            let mut diag = vec![4.0; n];
            let mut sup = vec![1.0; n];
            let mut rhs: Vec<f64> = (0..n)
                .map(|i| {
                    if i == 0 || i == n - 1 {
                        0.0
                    } else {
                        3.0 * (values[i + 1] - values[i - 1])
                    }
                })
                .collect();
            diag[0] = 1.0;
            sup[0] = 0.0;
            rhs[0] = start_slope;
            diag[n - 1] = 1.0;
            sub[n - 1] = 0.0;
            rhs[n - 1] = end_slope;
            solve_tridiagonal(&sub, &diag, &sup, &rhs)
        };

        Self {
            values: values.to_vec(),
            derivatives,
            closed,
        }
    }
}

impl Spline1d for CardinalSpline1d {
    fn evaluate(&self, t: f64) -> f64 {
        let (i, j, u) = locate(t, self.values.len(), self.closed);
        hermite(
            self.values[i],
            self.derivatives[i],
            self.values[j],
            self.derivatives[j],
            u,
        )
    }

    fn domain(&self) -> (f64, f64) {
        let n = self.values.len();
        if self.closed {
            (0.0, n as f64)
        } else {
            (0.0, (n - 1) as f64)
        }
    }
}
