use std::f64::consts::{FRAC_1_SQRT_2, PI};
use std::sync::OnceLock;

use crate::models::BLOCK_SIZE;

/// The orthonormal 8x8 DCT-II basis matrix.
///
/// Entry (k, i) = cos(pi * k * (2i + 1) / 16), with row 0 scaled by 1/sqrt(2)
/// and every entry scaled by sqrt(2/8). With that normalization the matrix is
/// orthogonal: B * B^T = I, so the inverse transform is just the transpose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DctBasis([[f64; BLOCK_SIZE]; BLOCK_SIZE]);

impl DctBasis {
    /// Compute the basis matrix from scratch.
    ///
    /// Deterministic and cheap, but still meant to run once per process —
    /// use [`DctBasis::cached`] on the hot path.
    pub fn compute() -> Self {
        let n = BLOCK_SIZE as f64;
        let mut m = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        for (k, row) in m.iter_mut().enumerate() {
            for (i, entry) in row.iter_mut().enumerate() {
                *entry = (PI * k as f64 * (2 * i + 1) as f64 / (2.0 * n)).cos();
            }
        }
        for entry in m[0].iter_mut() {
            *entry *= FRAC_1_SQRT_2;
        }
        let scale = (2.0 / n).sqrt();
        for row in m.iter_mut() {
            for entry in row.iter_mut() {
                *entry *= scale;
            }
        }
        Self(m)
    }

    /// Shared process-wide basis, computed on first use.
    ///
    /// Read-only after initialization, safe to use from any number of
    /// threads without locking.
    pub fn cached() -> &'static DctBasis {
        static BASIS: OnceLock<DctBasis> = OnceLock::new();
        BASIS.get_or_init(DctBasis::compute)
    }

    /// Basis entry at (k, i): frequency row k, sample column i.
    pub fn get(&self, k: usize, i: usize) -> f64 {
        self.0[k][i]
    }

    /// Row-major view of the basis entries.
    pub fn rows(&self) -> &[[f64; BLOCK_SIZE]; BLOCK_SIZE] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_orthogonality() {
        // B * B^T must be the identity within 1e-9
        let basis = DctBasis::compute();
        for i in 0..BLOCK_SIZE {
            for j in 0..BLOCK_SIZE {
                let mut dot = 0.0;
                for k in 0..BLOCK_SIZE {
                    dot += basis.get(i, k) * basis.get(j, k);
                }
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(dot, expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_dc_row_is_constant() {
        // Row 0 is the flat basis vector: sqrt(2/8) / sqrt(2) = 1 / (2*sqrt(2))
        let basis = DctBasis::compute();
        let expected = 1.0 / (2.0 * 2.0f64.sqrt());
        for i in 0..BLOCK_SIZE {
            assert_abs_diff_eq!(basis.get(0, i), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cached_matches_compute() {
        let cached = DctBasis::cached();
        let fresh = DctBasis::compute();
        assert_eq!(cached.rows(), fresh.rows());
        // Same instance on repeated calls
        assert!(std::ptr::eq(DctBasis::cached(), cached));
    }
}
