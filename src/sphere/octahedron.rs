//! Geodesic unit sphere from a subdivided octahedron
//!
//! The eight faces of the reference octahedron are refined independently
//! with the same barycentric grid, mapped onto the sphere, and concatenated
//! with per-face index offsets. Points on shared edges are emitted once per
//! adjacent face; see `TriangleMesh` for why duplicates are kept.

use nalgebra::{Point3, Vector3};

use crate::mesh::TriangleMesh;
use crate::sphere::triangulate::subdivide;

/// Reference octahedron vertices on the coordinate axes.
pub const OCTAHEDRON_VERTICES: [[f64; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

/// Vertex indices of the eight octahedron faces, covering the full sphere.
pub const OCTAHEDRON_FACES: [[usize; 3]; 8] = [
    [0, 2, 4],
    [2, 1, 4],
    [1, 3, 4],
    [3, 0, 4],
    [0, 5, 2],
    [2, 5, 1],
    [1, 5, 3],
    [3, 5, 0],
];

/// Triangulate the unit sphere at the given subdivision level.
///
/// Every node lies exactly on the unit sphere (weighted face point,
/// normalized). Face f contributes points [f·m, (f+1)·m) where m is the
/// per-face lattice size, and its triangle indices are offset accordingly,
/// so the output ordering is face-major and fully deterministic.
pub fn build_sphere(level: u32) -> TriangleMesh {
    let (weights, face_triangles) = subdivide(level);
    let points_per_face = weights.len();

    let mut mesh = TriangleMesh::with_capacity(
        8 * points_per_face,
        8 * face_triangles.len(),
    );

    for (face_idx, face) in OCTAHEDRON_FACES.iter().enumerate() {
        let [a, b, c] = face.map(|v| Vector3::from(OCTAHEDRON_VERTICES[v]));

        for w in &weights {
            let p = (a * w[0] + b * w[1] + c * w[2]).normalize();
            mesh.points.push(Point3::from(p));
        }

        let offset = face_idx * points_per_face;
        for t in &face_triangles {
            mesh.triangles.push([t[0] + offset, t[1] + offset, t[2] + offset]);
        }
    }

    mesh
}
