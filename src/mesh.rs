//! Triangle surface mesh: point coordinates plus connectivity

use nalgebra::Point3;

/// A triangle as three node indices into the owning mesh's point list.
pub type Triangle = [usize; 3];

/// Triangulated surface with shared node storage.
///
/// Coincident points generated along octant boundaries are kept as separate
/// nodes (one per adjacent face); both exporters tolerate duplicate
/// coincident vertices, so no welding pass runs.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    /// Node coordinates
    pub points: Vec<Point3<f64>>,
    /// Node indices per triangle
    pub triangles: Vec<Triangle>,
}

impl TriangleMesh {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(points: usize, triangles: usize) -> Self {
        Self {
            points: Vec::with_capacity(points),
            triangles: Vec::with_capacity(triangles),
        }
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Check that every triangle references valid node indices.
    pub fn is_consistent(&self) -> bool {
        let n = self.points.len();
        self.triangles.iter().all(|t| t.iter().all(|&i| i < n))
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}
