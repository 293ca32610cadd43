//! Independent elastic constants in Voigt notation
//!
//! Up to 21 constants c_ij (i ≤ j ∈ 1..6) describe a triclinic material;
//! higher-symmetry classes need only a subset. Unset constants stay 0.0 and
//! are either ignored or replaced by class defaults when the stiffness
//! matrix is built (see `tensor::symmetry`).

use serde::{Deserialize, Serialize};

/// Sparse set of independent stiffness components (GPa or any consistent unit).
///
/// A constant is treated as "provided" by the symmetry rules only when it is
/// strictly positive. This mirrors the reference constraint tables and means
/// genuinely negative values cannot be expressed for the defaulted slots --
/// a known input-range restriction, kept for compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct ElasticConstants {
    pub c11: f64,
    pub c12: f64,
    pub c13: f64,
    pub c14: f64,
    pub c15: f64,
    pub c16: f64,
    pub c22: f64,
    pub c23: f64,
    pub c24: f64,
    pub c25: f64,
    pub c26: f64,
    pub c33: f64,
    pub c34: f64,
    pub c35: f64,
    pub c36: f64,
    pub c44: f64,
    pub c45: f64,
    pub c46: f64,
    pub c55: f64,
    pub c56: f64,
    pub c66: f64,
}

impl ElasticConstants {
    /// Minimal isotropic parameter set.
    pub fn isotropic(c11: f64, c12: f64) -> Self {
        Self {
            c11,
            c12,
            ..Self::default()
        }
    }

    /// Minimal cubic parameter set.
    pub fn cubic(c11: f64, c12: f64, c44: f64) -> Self {
        Self {
            c11,
            c12,
            c44,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        let c = ElasticConstants::default();
        assert_eq!(c.c11, 0.0);
        assert_eq!(c.c56, 0.0);
    }

    #[test]
    fn cubic_shortcut_sets_three_constants() {
        let c = ElasticConstants::cubic(200.0, 100.0, 80.0);
        assert_eq!(c.c11, 200.0);
        assert_eq!(c.c12, 100.0);
        assert_eq!(c.c44, 80.0);
        assert_eq!(c.c13, 0.0);
    }
}
