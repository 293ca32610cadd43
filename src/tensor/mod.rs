/// Elastic tensor handling in Voigt notation
///
/// This module provides:
/// - Sparse independent elastic constants (`constants`)
/// - Symmetry-constrained stiffness construction (`symmetry`)
/// - Voigt inversion and rank-4 expansion (`voigt`)
/// - Directional Young's modulus contraction (`modulus`)

pub mod constants;
pub mod modulus;
pub mod symmetry;
pub mod voigt;

pub use constants::ElasticConstants;
pub use symmetry::{build_stiffness, SymmetryClass, VoigtMatrix};
pub use voigt::{expand, invert, Rank4Tensor, VOIGT_INDEX};
