//! Block scanning
//!
//! Walks the non-overlapping 8x8 blocks of a grayscale grid, transforms
//! each and asks the classifier whether it carries the marker. Detection is
//! existential: the scan stops at the first qualifying block.

use rayon::prelude::*;

use crate::classifier::classify;
use crate::models::{BLOCK_SIZE, GrayGrid};
use crate::transform::{DctBasis, forward};

/// All complete-block origins in raster order (top-to-bottom,
/// left-to-right), as (x, y). Trailing rows/columns that do not fill a
/// whole 8x8 block are skipped.
fn block_origins(width: usize, height: usize) -> Vec<(usize, usize)> {
    let mut origins = Vec::new();
    let mut y = 0;
    while y + BLOCK_SIZE <= height {
        let mut x = 0;
        while x + BLOCK_SIZE <= width {
            origins.push((x, y));
            x += BLOCK_SIZE;
        }
        y += BLOCK_SIZE;
    }
    origins
}

fn block_qualifies(grid: &GrayGrid, origin: (usize, usize), basis: &DctBasis) -> bool {
    match grid.block_at(origin.0, origin.1) {
        Some(block) => classify(&forward(&block, basis)),
        None => false,
    }
}

/// Scan a grayscale grid for the marker, sequentially and in raster order.
///
/// Returns `true` on the first block that classifies as a marker, `false`
/// when every complete block has been rejected. A grid smaller than 8x8
/// has no complete block and is simply `false` — never an error. The grid
/// is not mutated.
pub fn scan(grid: &GrayGrid) -> bool {
    let basis = DctBasis::cached();
    let mut y = 0;
    while y + BLOCK_SIZE <= grid.height() {
        let mut x = 0;
        while x + BLOCK_SIZE <= grid.width() {
            if block_qualifies(grid, (x, y), basis) {
                #[cfg(debug_assertions)]
                eprintln!("SCAN: marker block at ({}, {})", x, y);
                return true;
            }
            x += BLOCK_SIZE;
        }
        y += BLOCK_SIZE;
    }
    false
}

/// Scan with block evaluation spread across the rayon thread pool.
///
/// Blocks are independent, so evaluation order does not matter for the
/// result: the predicate is "any block qualifies", not "which block was
/// first". `any` stops scheduling new work once a hit is found. Same
/// boolean as [`scan`] for every input.
pub fn scan_parallel(grid: &GrayGrid) -> bool {
    let basis = DctBasis::cached();
    block_origins(grid.width(), grid.height())
        .into_par_iter()
        .any(|origin| block_qualifies(grid, origin, basis))
}

/// All qualifying block origins in raster order, as (x, y).
///
/// Diagnostic variant of [`scan`] with no short-circuit; used by the CLI
/// to report where in the image the marker sits.
pub fn scan_blocks(grid: &GrayGrid) -> Vec<(usize, usize)> {
    let basis = DctBasis::cached();
    block_origins(grid.width(), grid.height())
        .into_iter()
        .filter(|&origin| block_qualifies(grid, origin, basis))
        .collect()
}
