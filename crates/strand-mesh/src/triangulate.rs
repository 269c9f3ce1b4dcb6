use strand_math::{Aabb3, Point3, Vector3};

/// Triangle mesh with indexed vertex data.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Compute per-vertex normals from triangle indices.
    ///
    /// Shared vertices accumulate the (area-weighted) normals of all adjacent
    /// faces and normalize the result, which approximates smooth shading.
    pub fn compute_normals(&mut self) {
        let n = self.positions.len();
        self.normals.clear();
        self.normals.resize(n, Vector3::ZERO);

        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let p0 = self.positions[i0];
            let p1 = self.positions[i1];
            let p2 = self.positions[i2];
            let normal = (p1 - p0).cross(p2 - p0);
            self.normals[i0] += normal;
            self.normals[i1] += normal;
            self.normals[i2] += normal;
        }

        for n in &mut self.normals {
            let len = n.length();
            if len > 1e-12 {
                *n /= len;
            }
        }
    }

    /// Compute the axis-aligned bounding box of all positions.
    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(&self.positions).unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}
