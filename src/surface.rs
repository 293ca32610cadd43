//! Surface assembly: the full constants → modulus-surface pipeline
//!
//! Orchestrates the one-way data flow
//! constants + symmetry → stiffness → compliance → rank-4 tensor →
//! (sphere directions) → per-node modulus → scaled surface.
//! Pure and synchronous; identical inputs always produce bit-identical
//! output.

use nalgebra::Point3;

use crate::error::Result;
use crate::mesh::TriangleMesh;
use crate::sphere::build_sphere;
use crate::tensor::{build_stiffness, expand, invert, modulus, ElasticConstants, SymmetryClass};

/// Assembled modulus surface: each point is a sphere direction scaled by
/// the directional Young's modulus, so |p| = E(p/|p|).
#[derive(Debug, Clone, PartialEq)]
pub struct ModulusSurface {
    pub points: Vec<Point3<f64>>,
    pub triangles: Vec<[usize; 3]>,
}

impl ModulusSurface {
    /// Largest point distance from the origin, i.e. the maximum modulus.
    /// NaN points are skipped; an empty or all-NaN surface yields 0.
    pub fn max_radius(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.coords.norm())
            .filter(|r| !r.is_nan())
            .fold(0.0, f64::max)
    }

    /// Smallest point distance from the origin.
    pub fn min_radius(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.coords.norm())
            .filter(|r| !r.is_nan())
            .fold(f64::INFINITY, f64::min)
    }
}

/// Compute the directional-modulus surface for the given material.
///
/// Fails only when the stiffness matrix is singular. Non-finite moduli
/// (zero or negative compliance contraction) pass through into the point
/// coordinates rather than being masked.
pub fn assemble(
    constants: &ElasticConstants,
    symmetry: SymmetryClass,
    level: u32,
) -> Result<ModulusSurface> {
    let stiffness = build_stiffness(constants, symmetry);
    let compliance = expand(&invert(&stiffness)?);

    let sphere = build_sphere(level);
    let TriangleMesh { points, triangles } = sphere;

    let directions: Vec<_> = points.iter().map(|p| p.coords).collect();
    let moduli = modulus::evaluate(&compliance, &directions);

    let points = points
        .iter()
        .zip(&moduli)
        .map(|(p, &e)| Point3::from(p.coords * e))
        .collect();

    Ok(ModulusSurface { points, triangles })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn isotropic_surface_is_a_sphere() {
        let k = ElasticConstants::isotropic(200.0, 100.0);
        let surface = assemble(&k, SymmetryClass::Isotropic, 2).unwrap();
        let expected = 100.0 * 400.0 / 300.0;
        for p in &surface.points {
            assert_relative_eq!(p.coords.norm(), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn singular_stiffness_is_fatal() {
        let k = ElasticConstants::default();
        assert!(assemble(&k, SymmetryClass::Isotropic, 0).is_err());
    }

    #[test]
    fn assemble_is_idempotent() {
        let k = ElasticConstants::cubic(200.0, 100.0, 80.0);
        let a = assemble(&k, SymmetryClass::Cubic, 3).unwrap();
        let b = assemble(&k, SymmetryClass::Cubic, 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn radius_extrema_bracket_all_points() {
        let k = ElasticConstants::cubic(200.0, 100.0, 80.0);
        let surface = assemble(&k, SymmetryClass::Cubic, 2).unwrap();
        let (lo, hi) = (surface.min_radius(), surface.max_radius());
        assert!(lo < hi);
        for p in &surface.points {
            let r = p.coords.norm();
            assert!(r >= lo - 1e-12 && r <= hi + 1e-12);
        }
    }
}
