//! Global least-squares polynomial fitting.
//!
//! One polynomial per coordinate axis is regressed against the point
//! parameters; all three axes share a design matrix and are solved in a
//! single SVD least-squares pass.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use strand_core::{Result, StrandError};
use strand_math::Point3;

/// Highest polynomial order the fitter accepts.
///
/// The power-basis normal equations are badly conditioned beyond this;
/// higher requests are clamped here with a warning.
pub const MAX_POLYNOMIAL_ORDER: usize = 6;

/// A fitted 3D polynomial curve; coefficient `c` multiplies `t^c`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolynomialCurve {
    pub coefficients: Vec<Point3>,
}

impl PolynomialCurve {
    /// Fit a polynomial of (at most) `order` through `points` at `parameters`.
    ///
    /// `parameters` must hold exactly one value per point. Orders above
    /// [`MAX_POLYNOMIAL_ORDER`] are clamped with a warning; when fewer
    /// distinct parameter values exist than requested coefficients, the
    /// coefficient count drops to the distinct count so the system stays
    /// determined.
    pub fn fit(points: &[Point3], parameters: &[f64], order: usize) -> Result<Self> {
        let n = points.len();
        if parameters.len() != n {
            return Err(StrandError::ParameterMismatch {
                expected: n,
                actual: parameters.len(),
            });
        }
        if n < 2 {
            return Err(StrandError::DegenerateInput(format!(
                "need at least 2 points to fit a polynomial, got {n}"
            )));
        }

        let order = if order > MAX_POLYNOMIAL_ORDER {
            log::warn!(
                "polynomial order {order} is not supported, maximum is {MAX_POLYNOMIAL_ORDER}; \
                 fitting order {MAX_POLYNOMIAL_ORDER} instead"
            );
            MAX_POLYNOMIAL_ORDER
        } else {
            order
        };

        let mut distinct = parameters.to_vec();
        distinct.sort_by(f64::total_cmp);
        distinct.dedup();
        let coefficient_count = (order + 1).min(distinct.len());

        let design = DMatrix::from_fn(n, coefficient_count, |p, c| parameters[p].powi(c as i32));
        let dependent = DMatrix::from_fn(n, 3, |p, d| points[p][d]);
        let solution = design
            .svd(true, true)
            .solve(&dependent, 1e-12)
            .map_err(|e| StrandError::Geometry(format!("least-squares solve failed: {e}")))?;

        let coefficients = (0..coefficient_count)
            .map(|c| Point3::new(solution[(c, 0)], solution[(c, 1)], solution[(c, 2)]))
            .collect();
        Ok(Self { coefficients })
    }

    /// Evaluate the curve at parameter `t`.
    pub fn evaluate(&self, t: f64) -> Point3 {
        let mut point = Point3::ZERO;
        let mut power = 1.0;
        for &coefficient in &self.coefficients {
            point += coefficient * power;
            power *= t;
        }
        point
    }

    /// Sample `count` points evenly over `t` in `[0, 1]`.
    pub fn resample(&self, count: usize) -> Vec<Point3> {
        debug_assert!(count >= 2);
        (0..count)
            .map(|p| self.evaluate(p as f64 / (count - 1) as f64))
            .collect()
    }

    /// Total squared distance between the curve and `points` at `parameters`.
    pub fn squared_residual(&self, points: &[Point3], parameters: &[f64]) -> f64 {
        points
            .iter()
            .zip(parameters)
            .map(|(p, &t)| (self.evaluate(t) - *p).length_squared())
            .sum()
    }
}
