//! Curve generation over ordered 3D landmark points: per-axis spline models,
//! dense curve sampling with loop closure, curve parametrization, and global
//! least-squares polynomial fitting.

pub mod parametrize;
pub mod polynomial;
pub mod sample;
pub mod spline1d;

pub use parametrize::{parameters_from_indices, parameters_from_minimum_spanning_tree};
pub use polynomial::{PolynomialCurve, MAX_POLYNOMIAL_ORDER};
pub use sample::{
    close_loop, curve_point_count, sample_cardinal, sample_kochanek, sample_piecewise_linear,
};
pub use spline1d::{CardinalSpline1d, EndDerivatives, KochanekShape, KochanekSpline1d, Spline1d};
