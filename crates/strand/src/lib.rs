//! One-shot generation of smooth curve models from ordered 3D landmarks.
//!
//! Callers hand in control points and a configuration; out comes a capped
//! tube mesh, a bare polyline, or (for a single point) a sphere. Each call
//! is a pure, synchronous computation with no state shared between calls.
//!
//! ```
//! use strand::{generate_curve_model, CurveModel, CurveType, Point3, TubeOptions};
//!
//! let points = [
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 2.0, 0.0),
//!     Point3::new(3.0, 1.0, 1.0),
//! ];
//! let model = generate_curve_model(&points, &CurveType::CardinalSpline, &TubeOptions::default())
//!     .unwrap()
//!     .unwrap();
//! assert!(matches!(model, CurveModel::Tube(_)));
//! ```

pub mod config;
pub mod generate;

pub use config::{CurveType, KochanekOptions, ParameterSource, PolynomialOptions, TubeOptions};
pub use generate::generate_curve_model;

pub use strand_core::{Result, StrandError, Tolerance};
pub use strand_curve::{
    parameters_from_indices, parameters_from_minimum_spanning_tree, KochanekShape,
    MAX_POLYNOMIAL_ORDER,
};
pub use strand_math::{Point3, Vector3};
pub use strand_mesh::{CurveModel, Polyline, TriangleMesh};
