use crate::error::MarkerError;

/// Side length of the analysis tiles. The whole pipeline operates on
/// non-overlapping 8x8 blocks.
pub const BLOCK_SIZE: usize = 8;

/// An 8x8 tile of luminance samples cut from a grayscale grid.
///
/// Values are arbitrary finite reals (usually 0-255 but not range-checked).
/// Blocks are transient: one is built per scan position and dropped after
/// classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBlock(pub(crate) [[f64; BLOCK_SIZE]; BLOCK_SIZE]);

impl PixelBlock {
    /// Create a block from an 8x8 array. The fixed-size type makes a
    /// wrong-sized block unrepresentable here.
    pub fn new(samples: [[f64; BLOCK_SIZE]; BLOCK_SIZE]) -> Self {
        Self(samples)
    }

    /// Create a block from a flat row-major buffer of exactly 64 samples.
    pub fn from_samples(samples: &[f64]) -> Result<Self, MarkerError> {
        if samples.len() != BLOCK_SIZE * BLOCK_SIZE {
            return Err(MarkerError::InvalidInput {
                expected: "8x8 block (64 samples)",
                width: samples.len(),
                height: 0,
            });
        }
        let mut block = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        for (row, chunk) in block.iter_mut().zip(samples.chunks(BLOCK_SIZE)) {
            row.copy_from_slice(chunk);
        }
        Ok(Self(block))
    }

    /// Create a block from row slices. Fails unless there are exactly
    /// 8 rows of exactly 8 samples each.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MarkerError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height != BLOCK_SIZE || rows.iter().any(|r| r.len() != BLOCK_SIZE) {
            return Err(MarkerError::InvalidInput {
                expected: "8x8 block",
                width,
                height,
            });
        }
        let mut block = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        for (dst, src) in block.iter_mut().zip(rows) {
            dst.copy_from_slice(src);
        }
        Ok(Self(block))
    }

    /// Sample at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.0[row][col]
    }

    /// Row-major view of the samples.
    pub fn rows(&self) -> &[[f64; BLOCK_SIZE]; BLOCK_SIZE] {
        &self.0
    }
}

/// The 8x8 DCT output for one pixel block.
///
/// Same lifetime as the block that produced it; the classifier reads the
/// nine mid-band entries and the rest is discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientGrid(pub(crate) [[f64; BLOCK_SIZE]; BLOCK_SIZE]);

impl CoefficientGrid {
    /// Create a coefficient grid from an 8x8 array.
    pub fn new(coeffs: [[f64; BLOCK_SIZE]; BLOCK_SIZE]) -> Self {
        Self(coeffs)
    }

    /// Coefficient at (row, col), i.e. (vertical, horizontal) frequency.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.0[row][col]
    }

    /// Row-major view of the coefficients.
    pub fn rows(&self) -> &[[f64; BLOCK_SIZE]; BLOCK_SIZE] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_samples() {
        let samples: Vec<f64> = (0..64).map(|i| i as f64).collect();
        let block = PixelBlock::from_samples(&samples).unwrap();
        assert_eq!(block.get(0, 0), 0.0);
        assert_eq!(block.get(1, 0), 8.0);
        assert_eq!(block.get(7, 7), 63.0);
    }

    #[test]
    fn test_from_samples_wrong_length() {
        let samples = vec![0.0; 63];
        let err = PixelBlock::from_samples(&samples).unwrap_err();
        assert!(matches!(err, MarkerError::InvalidInput { width: 63, .. }));
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let rows: Vec<Vec<f64>> = (0..8).map(|_| vec![0.0; 7]).collect();
        assert!(PixelBlock::from_rows(&rows).is_err());

        let rows: Vec<Vec<f64>> = (0..7).map(|_| vec![0.0; 8]).collect();
        assert!(PixelBlock::from_rows(&rows).is_err());
    }

    #[test]
    fn test_from_rows() {
        let rows: Vec<Vec<f64>> = (0..8)
            .map(|r| (0..8).map(|c| (r * 8 + c) as f64).collect())
            .collect();
        let block = PixelBlock::from_rows(&rows).unwrap();
        assert_eq!(block.get(3, 4), 28.0);
    }
}
