use crate::error::MarkerError;
use crate::models::block::{BLOCK_SIZE, PixelBlock};

/// A grayscale image as an H x W grid of real-valued luminance samples.
///
/// This is the scanner's input format: decoding (file formats, color to
/// luminance) happens upstream, the grid itself is just numbers. Row-major
/// backing storage, never mutated by the scan.
#[derive(Debug, Clone, PartialEq)]
pub struct GrayGrid {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl GrayGrid {
    /// Create a zero-filled grid with the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Create a grid from a row-major sample buffer. Fails when the buffer
    /// length does not match `width * height`.
    pub fn from_samples(data: Vec<f64>, width: usize, height: usize) -> Result<Self, MarkerError> {
        if data.len() != width * height {
            return Err(MarkerError::InvalidInput {
                expected: "width * height samples",
                width: data.len(),
                height: 0,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a grid from 8-bit luma samples (one byte per pixel).
    pub fn from_luma(luma: &[u8], width: usize, height: usize) -> Result<Self, MarkerError> {
        if luma.len() != width * height {
            return Err(MarkerError::InvalidInput {
                expected: "width * height luma bytes",
                width: luma.len(),
                height: 0,
            });
        }
        Ok(Self {
            width,
            height,
            data: luma.iter().map(|&v| v as f64).collect(),
        })
    }

    /// Grid width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at (x, y); out-of-bounds reads return 0.0.
    pub fn get(&self, x: usize, y: usize) -> f64 {
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        self.data[y * self.width + x]
    }

    /// Set the sample at (x, y); out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.data[y * self.width + x] = value;
    }

    /// Extract the 8x8 block whose top-left corner is (x, y).
    ///
    /// Returns `None` when the block does not fit entirely inside the grid,
    /// so a block handed onward is always exactly 8x8.
    pub fn block_at(&self, x: usize, y: usize) -> Option<PixelBlock> {
        if x + BLOCK_SIZE > self.width || y + BLOCK_SIZE > self.height {
            return None;
        }
        let mut block = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        for (row, dst) in block.iter_mut().enumerate() {
            let start = (y + row) * self.width + x;
            dst.copy_from_slice(&self.data[start..start + BLOCK_SIZE]);
        }
        Some(PixelBlock::new(block))
    }

    /// Raw samples in row-major order.
    pub fn samples(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_luma() {
        let luma = vec![10u8, 20, 30, 40, 50, 60];
        let grid = GrayGrid::from_luma(&luma, 3, 2).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(0, 0), 10.0);
        assert_eq!(grid.get(2, 1), 60.0);
    }

    #[test]
    fn test_from_luma_wrong_length() {
        let luma = vec![0u8; 5];
        assert!(GrayGrid::from_luma(&luma, 3, 2).is_err());
    }

    #[test]
    fn test_out_of_bounds_get() {
        let grid = GrayGrid::new(4, 4);
        assert_eq!(grid.get(10, 10), 0.0);
    }

    #[test]
    fn test_block_at() {
        let mut grid = GrayGrid::new(16, 16);
        grid.set(8, 8, 42.0);
        grid.set(15, 15, 7.0);

        let block = grid.block_at(8, 8).unwrap();
        assert_eq!(block.get(0, 0), 42.0);
        assert_eq!(block.get(7, 7), 7.0);

        // Straddles the right edge
        assert!(grid.block_at(9, 0).is_none());
        // Exactly fits
        assert!(grid.block_at(8, 0).is_some());
    }

    #[test]
    fn test_block_at_too_small_grid() {
        let grid = GrayGrid::new(7, 12);
        assert!(grid.block_at(0, 0).is_none());
    }
}
