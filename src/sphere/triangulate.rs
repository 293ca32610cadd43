//! Recursive barycentric subdivision of a single triangle
//!
//! A triangle refined `level` times carries n = 2^level + 1 lattice points
//! per edge. Points live on the integer barycentric lattice (i, j, k) with
//! i + j + k = n − 1 and are emitted row by row; triangles pair "upward" and
//! "downward" unit cells per row band.
//!
//! Layout, level 1 (n = 3):
//!
//! ```text
//!   row 0:      0
//!   row 1:    1   2
//!   row 2:  3   4   5
//! ```
//!
//! yielding triangles (0 1 2), (1 3 4), (1 4 2), (2 4 5).

/// Barycentric weight triple of one lattice point; sums to 1.
pub type Weights = [f64; 3];

/// Flat index of lattice point (row, col) in the row-major triangular grid.
#[inline]
fn lattice_index(row: usize, col: usize) -> usize {
    row * (row + 1) / 2 + col
}

/// Subdivide the reference triangle `level` times.
///
/// Returns the barycentric weights of all n(n+1)/2 lattice points (the
/// position of a point is the weighted combination of the three parent
/// triangle vertices) and the connectivity of the (n−1)² sub-triangles.
pub fn subdivide(level: u32) -> (Vec<Weights>, Vec<[usize; 3]>) {
    let n = (1usize << level) + 1;
    let denom = (n - 1) as f64;

    let mut weights = Vec::with_capacity(n * (n + 1) / 2);
    for row in 0..n {
        for col in 0..=row {
            weights.push([
                (n - 1 - row) as f64 / denom,
                (row - col) as f64 / denom,
                col as f64 / denom,
            ]);
        }
    }

    let mut triangles = Vec::with_capacity((n - 1) * (n - 1));
    for row in 0..n - 1 {
        for col in 0..=row {
            // Upward cell under point (row, col).
            triangles.push([
                lattice_index(row, col),
                lattice_index(row + 1, col),
                lattice_index(row + 1, col + 1),
            ]);
            // Downward cell between this point and its right neighbour.
            if col < row {
                triangles.push([
                    lattice_index(row, col),
                    lattice_index(row + 1, col + 1),
                    lattice_index(row, col + 1),
                ]);
            }
        }
    }

    (weights, triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn level_zero_is_one_triangle() {
        let (w, t) = subdivide(0);
        assert_eq!(w.len(), 3);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0], [0, 1, 2]);
        assert_eq!(w[0], [1.0, 0.0, 0.0]);
        assert_eq!(w[1], [0.0, 1.0, 0.0]);
        assert_eq!(w[2], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn counts_follow_subdivision_level() {
        for level in 0..5u32 {
            let n = (1usize << level) + 1;
            let (w, t) = subdivide(level);
            assert_eq!(w.len(), n * (n + 1) / 2);
            assert_eq!(t.len(), (n - 1) * (n - 1));
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let (w, _) = subdivide(3);
        for triple in &w {
            assert_relative_eq!(triple[0] + triple[1] + triple[2], 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn connectivity_stays_in_range() {
        let (w, t) = subdivide(4);
        for tri in &t {
            for &idx in tri {
                assert!(idx < w.len());
            }
            // Degenerate triangles would repeat an index.
            assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
        }
    }

    #[test]
    fn level_one_grid_matches_layout() {
        let (w, t) = subdivide(1);
        assert_eq!(w.len(), 6);
        assert_eq!(
            t,
            vec![[0, 1, 2], [1, 3, 4], [1, 4, 2], [2, 4, 5]]
        );
        assert_eq!(w[4], [0.0, 0.5, 0.5]);
    }
}
