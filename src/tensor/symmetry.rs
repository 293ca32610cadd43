//! Symmetry-constrained stiffness matrix construction
//!
//! Builds the 6×6 Voigt stiffness matrix from a sparse `ElasticConstants`
//! set and a crystal symmetry class. Constraint rules apply cumulatively
//! along the class nesting order, each class inheriting and overriding the
//! rules of the classes before it.
//!
//! # References
//! - RFS Hearmon, "The Elastic Constants of Anisotropic Materials",
//!   Reviews of Modern Physics 18 (1946) 409-440

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::SurfaceError;
use crate::tensor::constants::ElasticConstants;

/// 6×6 stiffness (or compliance) matrix in Voigt notation.
pub type VoigtMatrix = nalgebra::SMatrix<f64, 6, 6>;

/// Crystal symmetry class, ordered from most to least constrained.
///
/// The derived `Ord` encodes the nesting
/// isotropic ⊂ cubic ⊂ tetragonal ⊂ hexagonal ⊂ orthorhombic ⊂ monoclinic
/// ⊂ triclinic, so "class X and below" tests read `symmetry >= X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SymmetryClass {
    Isotropic,
    Cubic,
    Tetragonal,
    Hexagonal,
    Orthorhombic,
    Monoclinic,
    Triclinic,
}

impl SymmetryClass {
    pub fn name(self) -> &'static str {
        match self {
            SymmetryClass::Isotropic => "isotropic",
            SymmetryClass::Cubic => "cubic",
            SymmetryClass::Tetragonal => "tetragonal",
            SymmetryClass::Hexagonal => "hexagonal",
            SymmetryClass::Orthorhombic => "orthorhombic",
            SymmetryClass::Monoclinic => "monoclinic",
            SymmetryClass::Triclinic => "triclinic",
        }
    }
}

impl fmt::Display for SymmetryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymmetryClass {
    type Err = SurfaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "isotropic" => Ok(SymmetryClass::Isotropic),
            "cubic" => Ok(SymmetryClass::Cubic),
            "tetragonal" => Ok(SymmetryClass::Tetragonal),
            "hexagonal" => Ok(SymmetryClass::Hexagonal),
            "orthorhombic" => Ok(SymmetryClass::Orthorhombic),
            "monoclinic" => Ok(SymmetryClass::Monoclinic),
            "triclinic" => Ok(SymmetryClass::Triclinic),
            other => Err(SurfaceError::InvalidSymmetry(other.to_string())),
        }
    }
}

/// Defaulting predicate: a constant is honored only when strictly positive.
///
/// Kept exactly as in the reference constraint tables; legitimate negative
/// constants cannot be expressed in the defaulted slots.
#[inline]
fn given(v: f64) -> bool {
    v > 0.0
}

/// Build the symmetrized 6×6 stiffness matrix for the requested class.
///
/// Rules apply cumulatively: every class also runs the substitutions of all
/// more-constrained classes first and may override their results. Never
/// fails; missing c11/c12 simply yield a (singular) zero-dominated matrix,
/// which the CLI layer rejects before the pipeline runs.
///
/// The output is symmetric except for the intentional antisymmetric
/// C16/C61 = (c16, -c16) pair introduced by the tetragonal rules.
pub fn build_stiffness(k: &ElasticConstants, symmetry: SymmetryClass) -> VoigtMatrix {
    use SymmetryClass::*;

    let mut c = VoigtMatrix::zeros();

    // Isotropic base: two independent constants.
    c[(0, 0)] = k.c11;
    c[(1, 1)] = k.c11;
    c[(2, 2)] = k.c11;
    c[(3, 3)] = 0.5 * (k.c11 - k.c12);
    c[(4, 4)] = c[(3, 3)];
    c[(5, 5)] = c[(3, 3)];
    c[(0, 1)] = k.c12;
    c[(0, 2)] = k.c12;
    c[(1, 2)] = k.c12;
    c[(1, 0)] = k.c12;
    c[(2, 0)] = k.c12;
    c[(2, 1)] = k.c12;

    if symmetry >= Cubic && given(k.c44) {
        c[(3, 3)] = k.c44;
        c[(4, 4)] = k.c44;
        c[(5, 5)] = k.c44;
    }

    if symmetry >= Tetragonal {
        c[(2, 2)] = if given(k.c33) { k.c33 } else { c[(0, 0)] };
        c[(5, 5)] = if given(k.c66) { k.c66 } else { c[(3, 3)] };

        let c13 = if given(k.c13) { k.c13 } else { c[(0, 2)] };
        c[(0, 2)] = c13;
        c[(1, 2)] = c13;
        c[(2, 0)] = c13;
        c[(2, 1)] = c13;

        // Antisymmetric off-diagonal pair; intentional per the reference
        // convention, not a typo.
        c[(0, 5)] = if given(k.c16) { k.c16 } else { 0.0 };
        c[(5, 0)] = if given(k.c16) { -k.c16 } else { 0.0 };
    }

    if symmetry >= Hexagonal {
        // Overrides any tetragonal c66.
        c[(5, 5)] = 0.5 * (k.c11 - k.c12);
    }

    if symmetry >= Orthorhombic {
        c[(1, 1)] = if given(k.c22) { k.c22 } else { c[(0, 0)] };
        c[(2, 2)] = if given(k.c33) { k.c33 } else { c[(0, 0)] };
        c[(4, 4)] = if given(k.c55) { k.c55 } else { c[(3, 3)] };
        c[(5, 5)] = if given(k.c66) { k.c66 } else { c[(3, 3)] };

        let c23 = if given(k.c23) { k.c23 } else { c[(1, 2)] };
        c[(1, 2)] = c23;
        c[(2, 1)] = c23;
    }

    if symmetry >= Monoclinic {
        let c26 = if given(k.c26) { k.c26 } else { 0.0 };
        c[(1, 5)] = c26;
        c[(5, 1)] = c26;
        let c36 = if given(k.c36) { k.c36 } else { 0.0 };
        c[(2, 5)] = c36;
        c[(5, 2)] = c36;
        let c45 = if given(k.c45) { k.c45 } else { 0.0 };
        c[(3, 4)] = c45;
        c[(4, 3)] = c45;
    }

    if symmetry >= Triclinic {
        let pairs: [(usize, usize, f64); 9] = [
            (0, 3, k.c14),
            (0, 4, k.c15),
            (1, 3, k.c24),
            (1, 4, k.c25),
            (2, 3, k.c34),
            (2, 4, k.c35),
            (2, 5, k.c36),
            (3, 5, k.c46),
            (4, 5, k.c56),
        ];
        for (i, j, v) in pairs {
            let v = if given(v) { v } else { 0.0 };
            c[(i, j)] = v;
            c[(j, i)] = v;
        }
    }

    c
}
