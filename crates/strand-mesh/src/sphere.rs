//! Latitude/longitude sphere tessellation.

use std::f64::consts::{PI, TAU};

use strand_math::{Point3, Vector3};

use crate::triangulate::TriangleMesh;

/// Tessellate a sphere around `center`.
///
/// `theta_resolution` segments run around the equator and `phi_resolution`
/// from pole to pole; both are clamped up to the smallest tessellatable
/// values (3 and 2). Poles are single vertices fanned to the nearest
/// latitude ring; rings are stitched with two triangles per quad.
pub fn sphere_mesh(
    center: Point3,
    radius: f64,
    theta_resolution: usize,
    phi_resolution: usize,
) -> TriangleMesh {
    let theta_res = theta_resolution.max(3);
    let phi_res = phi_resolution.max(2);

    let mut mesh = TriangleMesh::default();
    mesh.positions.reserve((phi_res - 1) * theta_res + 2);

    mesh.positions.push(center + radius * Vector3::Z);
    for j in 1..phi_res {
        let phi = PI * j as f64 / phi_res as f64;
        for i in 0..theta_res {
            let theta = TAU * i as f64 / theta_res as f64;
            let direction = Vector3::new(
                phi.sin() * theta.cos(),
                phi.sin() * theta.sin(),
                phi.cos(),
            );
            mesh.positions.push(center + radius * direction);
        }
    }
    mesh.positions.push(center - radius * Vector3::Z);

    // `j` counts latitude rings from 1 at the north pole.
    let ring = |j: usize, i: usize| (1 + (j - 1) * theta_res + i % theta_res) as u32;
    let south = (mesh.positions.len() - 1) as u32;

    for i in 0..theta_res {
        mesh.indices.extend_from_slice(&[0, ring(1, i), ring(1, i + 1)]);
    }
    for j in 1..phi_res - 1 {
        for i in 0..theta_res {
            let a = ring(j, i);
            let b = ring(j, i + 1);
            let c = ring(j + 1, i + 1);
            let d = ring(j + 1, i);
            mesh.indices.extend_from_slice(&[a, c, b]);
            mesh.indices.extend_from_slice(&[a, d, c]);
        }
    }
    for i in 0..theta_res {
        mesh.indices
            .extend_from_slice(&[south, ring(phi_res - 1, i + 1), ring(phi_res - 1, i)]);
    }

    mesh.compute_normals();
    mesh
}
