//! Mesh construction for sampled curves: swept tubes, spheres, and bare
//! polylines.

pub mod polyline;
pub mod sphere;
pub mod triangulate;
pub mod tube;

pub use polyline::Polyline;
pub use sphere::sphere_mesh;
pub use triangulate::TriangleMesh;
pub use tube::tube_from_polyline;

/// The mesh produced by one curve-generation call.
#[derive(Debug, Clone)]
pub enum CurveModel {
    /// Capped constant-radius surface swept along the sampled curve.
    Tube(TriangleMesh),
    /// The sampled curve itself, when no tube surface was requested.
    Polyline(Polyline),
    /// Fallback for a single control point.
    Sphere(TriangleMesh),
}
