use crate::models::{BLOCK_SIZE, CoefficientGrid, PixelBlock};
use crate::transform::basis::DctBasis;

type Mat8 = [[f64; BLOCK_SIZE]; BLOCK_SIZE];

fn mat_mul(a: &Mat8, b: &Mat8) -> Mat8 {
    let mut out = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            let mut sum = 0.0;
            for k in 0..BLOCK_SIZE {
                sum += a[i][k] * b[k][j];
            }
            *entry = sum;
        }
    }
    out
}

fn transpose(m: &Mat8) -> Mat8 {
    let mut out = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
    for (i, row) in m.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            out[j][i] = v;
        }
    }
    out
}

/// 2D DCT-II of a pixel block: `basis * block * basis^T`.
///
/// Separable row transform followed by column transform, expressed as two
/// 8x8 matrix products in f64.
pub fn forward(block: &PixelBlock, basis: &DctBasis) -> CoefficientGrid {
    let bt = transpose(basis.rows());
    CoefficientGrid::new(mat_mul(&mat_mul(basis.rows(), block.rows()), &bt))
}

/// Inverse 2D DCT: `basis^T * coeffs * basis`.
///
/// Exact inverse of [`forward`] because the basis is orthogonal. Used by the
/// round-trip tests and by marker synthesis in [`crate::tools`].
pub fn inverse(coeffs: &CoefficientGrid, basis: &DctBasis) -> PixelBlock {
    let bt = transpose(basis.rows());
    PixelBlock::new(mat_mul(&mat_mul(&bt, coeffs.rows()), basis.rows()))
}

/// 2D DCT-II using the shared process-wide basis.
pub fn dct2(block: &PixelBlock) -> CoefficientGrid {
    forward(block, DctBasis::cached())
}

/// Inverse 2D DCT using the shared process-wide basis.
pub fn idct2(coeffs: &CoefficientGrid) -> PixelBlock {
    inverse(coeffs, DctBasis::cached())
}
