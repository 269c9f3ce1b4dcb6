//! Configuration for curve-model generation.

use serde::{Deserialize, Serialize};
use strand_curve::KochanekShape;

/// How dense curve points are derived from the control points.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum CurveType {
    /// Straight segments between consecutive control points.
    PiecewiseLinear,
    /// Interpolating C2 cardinal spline per axis.
    #[default]
    CardinalSpline,
    /// Kochanek-Bartels spline with shape controls.
    KochanekSpline(KochanekOptions),
    /// Global least-squares polynomial fit; ignores the loop flag.
    Polynomial(PolynomialOptions),
}

/// Settings for the Kochanek-Bartels sampler.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct KochanekOptions {
    pub shape: KochanekShape,
    /// Pin the end derivatives to the first/last segment's finite difference
    /// instead of the spline's own two-point end rule.
    pub ends_copy_nearest_derivatives: bool,
}

/// Settings for the global polynomial fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolynomialOptions {
    /// Requested order; clamped to [`strand_curve::MAX_POLYNOMIAL_ORDER`].
    pub order: usize,
    pub parameters: ParameterSource,
}

impl Default for PolynomialOptions {
    fn default() -> Self {
        Self {
            order: 3,
            parameters: ParameterSource::default(),
        }
    }
}

/// Where the per-point curve parameters for the fit come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum ParameterSource {
    /// `i / (N-1)` per point, in insertion order.
    #[default]
    UniformIndices,
    /// Geodesic distance along a minimum spanning tree of the points.
    MinimumSpanningTree,
    /// Caller-supplied parameters; must hold exactly one value per point.
    Supplied(Vec<f64>),
}

/// Tube geometry applied to the sampled curve.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TubeOptions {
    /// Tube radius; zero or negative yields a bare polyline instead of a
    /// surface.
    pub radius: f64,
    /// Cross-section side count (also the sphere tessellation for N = 1).
    pub number_of_sides: usize,
    /// Curve points generated per control-point interval.
    pub segments_between_points: usize,
    /// Close the curve back onto its first control point.
    pub closed: bool,
}

impl Default for TubeOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            number_of_sides: 8,
            segments_between_points: 5,
            closed: false,
        }
    }
}
