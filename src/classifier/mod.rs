//! Marker classification
//!
//! Decides whether one block's DCT output carries the sudoku marker: the
//! nine mid-band coefficients must form a strict, well-separated ranking
//! (a clean permutation of 1..9 with no near-ties).

/// Rank, standard deviation and sorted-gap helpers over nine values
pub mod stats;

use crate::models::CoefficientGrid;
use stats::{population_std, rank_vector, ranks_complete, sorted_values};

/// Number of mid-band positions sampled per block.
pub const MID_BAND_COUNT: usize = 9;

/// The nine mid-band positions: the center 3x3 of the 8x8 coefficient grid,
/// row-major, as (row, col).
pub const MID_BAND: [(usize, usize); MID_BAND_COUNT] = [
    (2, 2),
    (2, 3),
    (2, 4),
    (3, 2),
    (3, 3),
    (3, 4),
    (4, 2),
    (4, 3),
    (4, 4),
];

/// Minimum gap between consecutive sorted coefficients, relative to the
/// group's own standard deviation.
pub const RANK_TOLERANCE: f64 = 0.1;

/// Absolute floor on the mid-band standard deviation. Below this the block
/// is too flat for a ranking to mean anything.
pub const MIN_STD: f64 = 1e-3;

/// The nine mid-band coefficients in fixed row-major order.
pub fn mid_band_values(coeffs: &CoefficientGrid) -> [f64; MID_BAND_COUNT] {
    let mut values = [0.0; MID_BAND_COUNT];
    for (v, &(row, col)) in values.iter_mut().zip(MID_BAND.iter()) {
        *v = coeffs.get(row, col);
    }
    values
}

/// Classify one block's DCT output as marker / not-marker.
///
/// Three checks, all of which must pass:
/// 1. the nine mid-band ranks form the complete set {1..9} (no ties);
/// 2. the mid-band standard deviation is at least [`MIN_STD`];
/// 3. every consecutive gap between the sorted values is at least
///    [`RANK_TOLERANCE`] times that standard deviation.
///
/// The distinctness check (1) is a cheap early exit: any exact tie also has
/// a zero gap, so separation (3) would reject it anyway. Pure function,
/// deterministic for identical floating-point input.
pub fn classify(coeffs: &CoefficientGrid) -> bool {
    let values = mid_band_values(coeffs);

    let ranks = rank_vector(&values);
    if !ranks_complete(&ranks) {
        return false;
    }

    let std = population_std(&values);
    if std < MIN_STD {
        return false;
    }

    let sorted = sorted_values(&values);
    for pair in sorted.windows(2) {
        if (pair[1] - pair[0]) / std < RANK_TOLERANCE {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BLOCK_SIZE;

    /// Coefficient grid with the given nine mid-band values and zeros
    /// everywhere else (the classifier never looks outside the mid-band).
    fn grid_with_mid_band(values: [f64; MID_BAND_COUNT]) -> CoefficientGrid {
        let mut coeffs = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        for (&v, &(row, col)) in values.iter().zip(MID_BAND.iter()) {
            coeffs[row][col] = v;
        }
        CoefficientGrid::new(coeffs)
    }

    #[test]
    fn test_well_separated_values_classify_true() {
        let grid = grid_with_mid_band([-48.0, 24.0, -12.0, 36.0, 0.0, -36.0, 12.0, 48.0, -24.0]);
        assert!(classify(&grid));
    }

    #[test]
    fn test_any_permutation_classifies_true() {
        // The test is about the value set, not which position holds which rank
        let base = [-48.0, -36.0, -24.0, -12.0, 0.0, 12.0, 24.0, 36.0, 48.0];
        let mut reversed = base;
        reversed.reverse();
        assert!(classify(&grid_with_mid_band(base)));
        assert!(classify(&grid_with_mid_band(reversed)));
    }

    #[test]
    fn test_exact_tie_classifies_false() {
        // Two equal mid-band values must fail regardless of the other seven
        let grid = grid_with_mid_band([-48.0, 24.0, -12.0, 36.0, 0.0, -36.0, 12.0, 48.0, 24.0]);
        assert!(!classify(&grid));
    }

    #[test]
    fn test_flat_mid_band_classifies_false() {
        // All-zero mid-band: ties everywhere and zero spread
        let grid = grid_with_mid_band([0.0; MID_BAND_COUNT]);
        assert!(!classify(&grid));
    }

    #[test]
    fn test_low_dispersion_classifies_false() {
        // Distinct but microscopically spread: std is below the 1e-3 floor
        let values = [
            0.0, 0.0001, 0.0002, 0.0003, 0.0004, 0.0005, 0.0006, 0.0007, 0.0008,
        ];
        assert!(!classify(&grid_with_mid_band(values)));
    }

    #[test]
    fn test_near_tie_cluster_classifies_false() {
        // Eight values packed within 0.007 of each other plus one far
        // outlier: the outlier inflates the std, so every small gap falls
        // under RANK_TOLERANCE * std
        let values = [
            0.0, 0.001, 0.002, 0.003, 0.004, 0.005, 0.006, 0.007, 10.0,
        ];
        assert!(!classify(&grid_with_mid_band(values)));
    }

    #[test]
    fn test_one_narrow_gap_classifies_false() {
        // Eight healthy gaps and one gap just under the tolerance
        let mut values = [-48.0, -36.0, -24.0, -12.0, 0.0, 12.0, 24.0, 36.0, 48.0];
        // std is about 31; shrink one gap to about 1.0
        values[4] = 11.0;
        assert!(!classify(&grid_with_mid_band(values)));
    }

    #[test]
    fn test_mid_band_values_order() {
        let mut coeffs = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        let mut expected = [0.0; MID_BAND_COUNT];
        for (n, &(row, col)) in MID_BAND.iter().enumerate() {
            coeffs[row][col] = n as f64 + 1.0;
            expected[n] = n as f64 + 1.0;
        }
        let grid = CoefficientGrid::new(coeffs);
        assert_eq!(mid_band_values(&grid), expected);
    }
}
