//! Error types for the modulus-surface pipeline
//!
//! Every error is fatal: one invocation computes one surface, so there is
//! no retry or partial-result mode. Non-finite moduli are deliberately NOT
//! errors; they propagate into the output geometry (see `tensor::modulus`).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SurfaceError>;

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("unknown crystal symmetry: {0}")]
    InvalidSymmetry(String),

    #[error("required elastic constant {0} not given")]
    MissingConstant(&'static str),

    #[error("stiffness matrix is singular and cannot be inverted to a compliance")]
    SingularStiffness,

    #[error("material file error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
