//! Material definition files
//!
//! A TOML file can replace the 21 `--cIJ` command-line options:
//!
//! ```toml
//! symmetry = "cubic"
//!
//! [constants]
//! c11 = 200.0
//! c12 = 100.0
//! c44 = 80.0
//! ```
//!
//! Unknown keys are rejected so typos in constant names surface as errors
//! instead of silently defaulting to zero.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SurfaceError};
use crate::tensor::{ElasticConstants, SymmetryClass};

/// Parsed material file: symmetry class plus the independent constants.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaterialFile {
    pub symmetry: SymmetryClass,
    #[serde(default)]
    pub constants: ElasticConstants,
}

impl MaterialFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            SurfaceError::Config(format!(
                "failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| SurfaceError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cubic_material() {
        let material = MaterialFile::parse(
            r#"
            symmetry = "cubic"

            [constants]
            c11 = 200.0
            c12 = 100.0
            c44 = 80.0
            "#,
        )
        .unwrap();
        assert_eq!(material.symmetry, SymmetryClass::Cubic);
        assert_eq!(material.constants.c44, 80.0);
        assert_eq!(material.constants.c13, 0.0);
    }

    #[test]
    fn missing_constants_table_defaults_to_zero() {
        let material = MaterialFile::parse("symmetry = \"isotropic\"").unwrap();
        assert_eq!(material.constants, ElasticConstants::default());
    }

    #[test]
    fn unknown_constant_name_is_rejected() {
        let err = MaterialFile::parse(
            r#"
            symmetry = "cubic"

            [constants]
            c11 = 200.0
            c17 = 1.0
            "#,
        );
        assert!(matches!(err, Err(SurfaceError::Config(_))));
    }

    #[test]
    fn unknown_symmetry_is_rejected() {
        assert!(MaterialFile::parse("symmetry = \"trigonal\"").is_err());
    }
}
