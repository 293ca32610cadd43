//! Voigt-notation algebra: 6×6 inversion and rank-4 expansion
//!
//! The contracted 6×6 representation folds the engineering-strain factor of
//! two into the shear rows/columns. Inverting a stiffness into a compliance
//! therefore needs the rescaling S = W · C⁻¹ · W with W = diag(1,1,1,½,½,½);
//! a plain matrix inverse would be off by factors of 2 and 4 in the shear
//! blocks.

use crate::error::{Result, SurfaceError};
use crate::tensor::symmetry::VoigtMatrix;

/// Full 3×3×3×3 elastic tensor with minor symmetries
/// `T[i][j][k][l] = T[i][j][l][k] = T[j][i][k][l]`.
pub type Rank4Tensor = [[[[f64; 3]; 3]; 3]; 3];

/// Voigt index map: contracted index a ∈ 0..6 → tensor index pair (i, j).
pub const VOIGT_INDEX: [(usize, usize); 6] = [(0, 0), (1, 1), (2, 2), (1, 2), (0, 2), (0, 1)];

/// Invert a Voigt-notation tensor, correcting for the shear factor of 2.
///
/// Returns `SingularStiffness` when the matrix has no inverse.
pub fn invert(m: &VoigtMatrix) -> Result<VoigtMatrix> {
    let inv = m.try_inverse().ok_or(SurfaceError::SingularStiffness)?;

    let mut w = VoigtMatrix::identity();
    w[(3, 3)] = 0.5;
    w[(4, 4)] = 0.5;
    w[(5, 5)] = 0.5;

    Ok(w * inv * w)
}

/// Expand a contracted 6×6 matrix to the full fourth-rank representation.
///
/// Each (a, b) entry populates all four minor-symmetry permutations of its
/// tensor index pairs. Deterministic, no failure modes.
pub fn expand(m: &VoigtMatrix) -> Rank4Tensor {
    let mut t = [[[[0.0; 3]; 3]; 3]; 3];
    for (a, &(i, j)) in VOIGT_INDEX.iter().enumerate() {
        for (b, &(k, l)) in VOIGT_INDEX.iter().enumerate() {
            let v = m[(a, b)];
            t[i][j][k][l] = v;
            t[i][j][l][k] = v;
            t[j][i][k][l] = v;
            t[j][i][l][k] = v;
        }
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::constants::ElasticConstants;
    use crate::tensor::symmetry::{build_stiffness, SymmetryClass};
    use approx::assert_relative_eq;

    fn cubic_stiffness() -> VoigtMatrix {
        build_stiffness(
            &ElasticConstants::cubic(200.0, 100.0, 80.0),
            SymmetryClass::Cubic,
        )
    }

    #[test]
    fn invert_rejects_singular_matrix() {
        let zero = VoigtMatrix::zeros();
        assert!(matches!(
            invert(&zero),
            Err(SurfaceError::SingularStiffness)
        ));
    }

    #[test]
    fn invert_round_trips() {
        let c = cubic_stiffness();
        let s = invert(&c).unwrap();
        let back = invert(&s).unwrap();
        for i in 0..6 {
            for j in 0..6 {
                assert_relative_eq!(back[(i, j)], c[(i, j)], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn compliance_shear_carries_voigt_factor() {
        // For cubic symmetry S44 = 1/(4 c44) in tensor-consistent form:
        // the W rescaling halves the plain inverse 1/c44 twice.
        let s = invert(&cubic_stiffness()).unwrap();
        assert_relative_eq!(s[(3, 3)], 1.0 / (4.0 * 80.0), epsilon = 1e-12);
    }

    #[test]
    fn expand_honours_minor_symmetries() {
        let t = expand(&cubic_stiffness());
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    for l in 0..3 {
                        let v = t[i][j][k][l];
                        assert_eq!(v, t[i][j][l][k]);
                        assert_eq!(v, t[j][i][k][l]);
                        assert_eq!(v, t[j][i][l][k]);
                    }
                }
            }
        }
    }

    #[test]
    fn expand_places_voigt_entries() {
        let c = cubic_stiffness();
        let t = expand(&c);
        assert_relative_eq!(t[0][0][0][0], c[(0, 0)]);
        assert_relative_eq!(t[0][0][1][1], c[(0, 1)]);
        assert_relative_eq!(t[1][2][1][2], c[(3, 3)]);
        assert_relative_eq!(t[0][1][0][1], c[(5, 5)]);
    }
}
