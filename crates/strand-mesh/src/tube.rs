//! Tube sweep: extrude a regular polygon cross-section along a polyline.

use std::f64::consts::TAU;

use strand_core::Tolerance;
use strand_math::{Point3, Vector3};

use crate::triangulate::TriangleMesh;

/// A cross-section frame at one polyline point.
///
/// `normal` and `binormal` span the plane perpendicular to `tangent`; the
/// vertex ring lives in that plane.
#[derive(Debug, Clone, Copy)]
struct Frame {
    tangent: Vector3,
    normal: Vector3,
    binormal: Vector3,
}

impl Frame {
    /// Build a frame for a tangent from an arbitrary perpendicular.
    fn from_tangent(tangent: Vector3) -> Self {
        let t = tangent.try_normalize().unwrap_or(Vector3::Z);
        let arbitrary = if t.x.abs() < 0.9 { Vector3::X } else { Vector3::Y };
        let normal = t.cross(arbitrary).normalize();
        let binormal = t.cross(normal).normalize();
        Self {
            tangent: t,
            normal,
            binormal,
        }
    }

    /// Parallel-transport this frame onto a new tangent.
    ///
    /// The previous normal is projected onto the new tangent plane, which
    /// keeps the ring orientation from spinning between stations. When the
    /// tangent has swung onto the old normal the projection vanishes and the
    /// frame is restarted instead.
    fn transport(&self, tangent: Vector3) -> Self {
        let projected = self.normal - tangent * self.normal.dot(tangent);
        match projected.try_normalize() {
            Some(normal) => Self {
                tangent,
                normal,
                binormal: tangent.cross(normal).normalize(),
            },
            None => Self::from_tangent(tangent),
        }
    }
}

/// Unit tangents along the polyline: central differences at interior points,
/// one-sided at the ends. A degenerate difference reuses the previous
/// tangent so duplicate curve points do not break the sweep.
fn polyline_tangents(points: &[Point3], tol: Tolerance) -> Vec<Vector3> {
    let n = points.len();
    let mut tangents: Vec<Vector3> = Vec::with_capacity(n);
    for i in 0..n {
        let raw = if i == 0 {
            points[1] - points[0]
        } else if i == n - 1 {
            points[n - 1] - points[n - 2]
        } else {
            points[i + 1] - points[i - 1]
        };
        let tangent = if tol.is_zero(raw.length()) {
            tangents.last().copied().unwrap_or(Vector3::Z)
        } else {
            raw.normalize()
        };
        tangents.push(tangent);
    }
    tangents
}

/// Sweep a regular `sides`-gon of the given radius along the polyline.
///
/// One vertex ring is placed at every polyline point, adjacent rings are
/// stitched with two triangles per quad, and both ends are capped with a
/// center-vertex fan. Requires at least 2 points, `sides >= 3`, and a
/// positive radius.
pub fn tube_from_polyline(points: &[Point3], radius: f64, sides: usize) -> TriangleMesh {
    let n = points.len();
    debug_assert!(n >= 2);
    debug_assert!(sides >= 3);
    debug_assert!(radius > 0.0);

    let tol = Tolerance::default_precision();
    let tangents = polyline_tangents(points, tol);
    let mut frames: Vec<Frame> = Vec::with_capacity(n);
    frames.push(Frame::from_tangent(tangents[0]));
    for i in 1..n {
        let previous = frames[i - 1];
        frames.push(previous.transport(tangents[i]));
    }

    let mut mesh = TriangleMesh::default();
    mesh.positions.reserve(n * sides + 2);
    for (center, frame) in points.iter().zip(&frames) {
        for s in 0..sides {
            let angle = TAU * s as f64 / sides as f64;
            let offset = angle.cos() * frame.normal + angle.sin() * frame.binormal;
            mesh.positions.push(*center + radius * offset);
        }
    }

    let ring = |i: usize, s: usize| (i * sides + s % sides) as u32;
    mesh.indices.reserve((n - 1) * sides * 6 + sides * 6);
    for i in 0..n - 1 {
        for s in 0..sides {
            let a = ring(i, s);
            let b = ring(i, s + 1);
            let c = ring(i + 1, s + 1);
            let d = ring(i + 1, s);
            mesh.indices.extend_from_slice(&[a, b, c]);
            mesh.indices.extend_from_slice(&[a, c, d]);
        }
    }

    // End caps: a center vertex fanned to its ring. The start cap faces
    // against the first tangent, the end cap along the last.
    let start_center = mesh.positions.len() as u32;
    mesh.positions.push(points[0]);
    for s in 0..sides {
        mesh.indices
            .extend_from_slice(&[start_center, ring(0, s + 1), ring(0, s)]);
    }
    let end_center = mesh.positions.len() as u32;
    mesh.positions.push(points[n - 1]);
    for s in 0..sides {
        mesh.indices
            .extend_from_slice(&[end_center, ring(n - 1, s), ring(n - 1, s + 1)]);
    }

    mesh.compute_normals();
    mesh
}
