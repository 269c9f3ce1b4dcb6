//! Kochanek-Bartels spline over scalar knots.

use serde::{Deserialize, Serialize};

use super::{hermite, locate, EndDerivatives, Spline1d};

/// Shape controls applied uniformly at every knot.
///
/// All three default to 0.0, which reduces the spline to a Catmull-Rom
/// tangent rule. Tension 1.0 zeroes every tangent; negative bias favors the
/// incoming segment, positive the outgoing one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KochanekShape {
    pub bias: f64,
    pub continuity: f64,
    pub tension: f64,
}

/// A cubic spline with Kochanek-Bartels tangents.
///
/// Each knot carries two tangents: `source` leaving the knot and `dest`
/// arriving at it, computed locally from the neighboring knots and the shape
/// controls. Interval `i` blends `source[i]` with `dest[i+1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KochanekSpline1d {
    values: Vec<f64>,
    source: Vec<f64>,
    dest: Vec<f64>,
    closed: bool,
}

impl KochanekSpline1d {
    /// Fit a spline through `values` at knots `0, 1, 2, ...`.
    ///
    /// Open fits resolve the end slopes through `ends`; closed fits wrap the
    /// tangent neighborhood around the seam and ignore `ends`.
    pub fn fit(values: &[f64], closed: bool, shape: KochanekShape, ends: EndDerivatives) -> Self {
        let n = values.len();
        debug_assert!(n >= 2);

        let mut source = vec![0.0; n];
        let mut dest = vec![0.0; n];

        let b = shape.bias;
        let c = shape.continuity;
        let t = shape.tension;
        let tangents = |prev: f64, next: f64| {
            let ds = 0.5 * (1.0 - t) * ((1.0 + b) * (1.0 - c) * prev + (1.0 - b) * (1.0 + c) * next);
            let dd = 0.5 * (1.0 - t) * ((1.0 + b) * (1.0 + c) * prev + (1.0 - b) * (1.0 - c) * next);
            (ds, dd)
        };

        if closed {
            for i in 0..n {
                let prev = values[i] - values[(i + n - 1) % n];
                let next = values[(i + 1) % n] - values[i];
                let (ds, dd) = tangents(prev, next);
                source[i] = ds;
                dest[i] = dd;
            }
        } else {
            for i in 1..n - 1 {
                let prev = values[i] - values[i - 1];
                let next = values[i + 1] - values[i];
                let (ds, dd) = tangents(prev, next);
                source[i] = ds;
                dest[i] = dd;
            }
            let (start_slope, end_slope) = ends.resolve(values);
            source[0] = start_slope;
            dest[0] = start_slope;
            source[n - 1] = end_slope;
            dest[n - 1] = end_slope;
        }

        Self {
            values: values.to_vec(),
            source,
            dest,
            closed,
        }
    }
}

impl Spline1d for KochanekSpline1d {
    fn evaluate(&self, t: f64) -> f64 {
        let (i, j, u) = locate(t, self.values.len(), self.closed);
        hermite(self.values[i], self.source[i], self.values[j], self.dest[j], u)
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interpolates_knots() {
        let values = [1.0, -2.0, 0.5, 3.0];
        let spline = KochanekSpline1d::fit(
            &values,
            false,
            KochanekShape::default(),
            EndDerivatives::Automatic,
        );
        for (i, &v) in values.iter().enumerate() {
            assert_relative_eq!(spline.evaluate(i as f64), v, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_default_shape_matches_catmull_rom() {
        // With bias = continuity = tension = 0 the interior tangent is the
        // central difference (y[i+1] - y[i-1]) / 2.
        let values = [0.0, 2.0, 3.0, 1.0];
        let spline = KochanekSpline1d::fit(
            &values,
            false,
            KochanekShape::default(),
            EndDerivatives::Automatic,
        );
        let h = 1e-6;
        let slope = (spline.evaluate(1.0 + h) - spline.evaluate(1.0)) / h;
        assert_relative_eq!(slope, (3.0 - 0.0) / 2.0, epsilon = 1e-4);
    }

    #[test]
    fn test_full_tension_flattens_tangents() {
        let values = [0.0, 1.0, 0.0];
        let shape = KochanekShape {
            tension: 1.0,
            ..KochanekShape::default()
        };
        let spline = KochanekSpline1d::fit(&values, false, shape, EndDerivatives::Pinned { start: 0.0, end: 0.0 });
        let h = 1e-6;
        let slope = (spline.evaluate(1.0 + h) - spline.evaluate(1.0)) / h;
        assert!(slope.abs() < 1e-4);
    }

    #[test]
    fn test_pinned_matches_automatic_for_unit_spacing() {
        // With knots one apart, the nearest-two-knots rule equals the pinned
        // finite difference, so the two policies agree.
        let values = [0.0, 2.0, 3.0, 1.0];
        let auto = KochanekSpline1d::fit(
            &values,
            false,
            KochanekShape::default(),
            EndDerivatives::Automatic,
        );
        let pinned = KochanekSpline1d::fit(
            &values,
            false,
            KochanekShape::default(),
            EndDerivatives::Pinned { start: 2.0, end: -2.0 },
        );
        for k in 0..=30 {
            let t = 3.0 * k as f64 / 30.0;
            assert_relative_eq!(auto.evaluate(t), pinned.evaluate(t), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_closed_seam_continuity() {
        let values = [0.0, 1.0, 0.0, -1.0];
        let spline = KochanekSpline1d::fit(
            &values,
            true,
            KochanekShape::default(),
            EndDerivatives::Automatic,
        );
        assert_relative_eq!(spline.evaluate(4.0), spline.evaluate(0.0), epsilon = 1e-12);
        let h = 1e-6;
        let before = (spline.evaluate(4.0) - spline.evaluate(4.0 - h)) / h;
        let after = (spline.evaluate(h) - spline.evaluate(0.0)) / h;
        assert_relative_eq!(before, after, epsilon = 1e-4);
    }
}
