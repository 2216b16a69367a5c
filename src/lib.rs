//! sudoku_marker - frequency-domain sudoku marker detection
//!
//! Detects an embedded marker pattern in images by analyzing the DCT
//! structure of non-overlapping 8x8 blocks. A block carries the marker when
//! its nine mid-band coefficients form a strict, well-separated ranking
//! (a clean permutation of 1..9). An image is "detected" as soon as any
//! block anywhere in its grid passes that test.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Rank-distinctness-and-separation test over the mid-band coefficients
pub mod classifier;
/// The single error type of the core (shape contract violations)
pub mod error;
/// Core data structures (GrayGrid, PixelBlock, CoefficientGrid)
pub mod models;
/// Block iteration and short-circuit detection across a grid
pub mod scanner;
/// File loading, dataset sweeps and marker synthesis fixtures
pub mod tools;
/// 8x8 DCT-II basis and forward/inverse block transforms
pub mod transform;
/// Image preprocessing (RGB/RGBA to luma)
pub mod utils;

pub use classifier::{MID_BAND, MIN_STD, RANK_TOLERANCE, classify};
pub use error::MarkerError;
pub use models::{BLOCK_SIZE, CoefficientGrid, GrayGrid, PixelBlock};
pub use scanner::{scan, scan_blocks, scan_parallel};
pub use transform::DctBasis;

use utils::grayscale::{rgb_to_grayscale, rgb_to_grayscale_parallel};

/// Images at least this many pixels on a side get the parallel scan by
/// default; below it the sequential sweep wins on overhead.
const PARALLEL_THRESHOLD: usize = 512;

/// Detect the sudoku marker in an RGB image
///
/// # Arguments
/// * `image` - Raw RGB bytes (3 bytes per pixel)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
/// `true` when any 8x8 block of the image carries the marker
///
/// Uses the parallel scan for large images (512px+ on either side)
pub fn detect(image: &[u8], width: usize, height: usize) -> bool {
    // Step 1: Convert to grayscale
    let gray = if width >= PARALLEL_THRESHOLD || height >= PARALLEL_THRESHOLD {
        rgb_to_grayscale_parallel(image, width, height)
    } else {
        rgb_to_grayscale(image, width, height)
    };

    // Step 2: Scan the luminance grid
    detect_from_grayscale(&gray, width, height)
}

/// Detect the sudoku marker in a pre-computed grayscale image
///
/// # Arguments
/// * `image` - Grayscale bytes (1 byte per pixel)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
pub fn detect_from_grayscale(image: &[u8], width: usize, height: usize) -> bool {
    let grid = match GrayGrid::from_luma(image, width, height) {
        Ok(grid) => grid,
        Err(_) => {
            // Buffer/dimension mismatch: nothing sensible to scan
            return false;
        }
    };

    #[cfg(debug_assertions)]
    eprintln!(
        "DETECT: {}x{} grid, {} complete blocks",
        width,
        height,
        (width / BLOCK_SIZE) * (height / BLOCK_SIZE)
    );

    if width >= PARALLEL_THRESHOLD || height >= PARALLEL_THRESHOLD {
        scan_parallel(&grid)
    } else {
        scan(&grid)
    }
}

/// Detector with configuration options
pub struct Detector {
    /// Force sequential or parallel scanning; `None` picks by image size
    parallel: Option<bool>,
}

impl Detector {
    /// Create a detector that picks the scan strategy by image size
    pub fn new() -> Self {
        Self { parallel: None }
    }

    /// Create a detector that always scans sequentially
    pub fn sequential() -> Self {
        Self {
            parallel: Some(false),
        }
    }

    /// Create a detector that always scans on the rayon thread pool
    pub fn parallel() -> Self {
        Self {
            parallel: Some(true),
        }
    }

    /// Detect the marker in an RGB image
    pub fn detect(&self, image: &[u8], width: usize, height: usize) -> bool {
        let gray = rgb_to_grayscale(image, width, height);
        self.detect_grayscale(&gray, width, height)
    }

    /// Detect the marker in a grayscale image
    pub fn detect_grayscale(&self, image: &[u8], width: usize, height: usize) -> bool {
        let grid = match GrayGrid::from_luma(image, width, height) {
            Ok(grid) => grid,
            Err(_) => return false,
        };
        self.scan_grid(&grid)
    }

    /// Scan an already-built luminance grid
    pub fn scan_grid(&self, grid: &GrayGrid) -> bool {
        let use_parallel = self.parallel.unwrap_or_else(|| {
            grid.width() >= PARALLEL_THRESHOLD || grid.height() >= PARALLEL_THRESHOLD
        });
        if use_parallel {
            scan_parallel(grid)
        } else {
            scan(grid)
        }
    }

    /// All qualifying block origins in raster order, as (x, y)
    pub fn find_blocks(&self, grid: &GrayGrid) -> Vec<(usize, usize)> {
        scan_blocks(grid)
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}
