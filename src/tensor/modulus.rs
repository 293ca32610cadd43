//! Directional Young's modulus from the full compliance tensor
//!
//! E(d) = 1 / (d_i d_j d_k d_l S_ijkl), contracted over all 81 index
//! combinations. The batch over directions is embarrassingly parallel and
//! runs on rayon; `par_iter().map().collect()` keeps the output order
//! identical to the input order, so results stay deterministic.

use nalgebra::Vector3;
use rayon::prelude::*;

use crate::tensor::voigt::Rank4Tensor;

/// Contract the compliance tensor four times with one unit direction.
fn contract(s: &Rank4Tensor, d: &Vector3<f64>) -> f64 {
    let mut acc = 0.0;
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                for l in 0..3 {
                    acc += d[i] * d[j] * d[k] * d[l] * s[i][j][k][l];
                }
            }
        }
    }
    acc
}

/// Young's modulus along a single unit direction.
///
/// A zero or negative contraction (physically invalid compliance) yields an
/// infinite, negative or NaN modulus; the value propagates unmodified so
/// downstream consumers see the invalid input instead of a silently clamped
/// surface.
pub fn evaluate_one(s: &Rank4Tensor, direction: &Vector3<f64>) -> f64 {
    1.0 / contract(s, direction)
}

/// Young's modulus for a batch of unit directions, order-preserving.
pub fn evaluate(s: &Rank4Tensor, directions: &[Vector3<f64>]) -> Vec<f64> {
    directions
        .par_iter()
        .map(|d| evaluate_one(s, d))
        .collect()
}
