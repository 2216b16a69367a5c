//! Small numeric helpers for the nine-value rank test.
//!
//! These are deliberately plain functions over fixed nine-element arrays:
//! easy to test in isolation, no numeric library behind them.

use crate::classifier::MID_BAND_COUNT;

/// Rank of each value among the nine (1 = smallest, 9 = largest).
///
/// Equal values receive equal ranks, so a tie collapses the rank set —
/// which is exactly what the distinctness check looks for.
pub fn rank_vector(values: &[f64; MID_BAND_COUNT]) -> [u8; MID_BAND_COUNT] {
    let mut ranks = [1u8; MID_BAND_COUNT];
    for (i, &v) in values.iter().enumerate() {
        for &other in values.iter() {
            if other < v {
                ranks[i] += 1;
            }
        }
    }
    ranks
}

/// True when the ranks are exactly the set {1, ..., 9}.
pub fn ranks_complete(ranks: &[u8; MID_BAND_COUNT]) -> bool {
    let mut seen = [false; MID_BAND_COUNT];
    for &r in ranks {
        seen[r as usize - 1] = true;
    }
    seen.iter().all(|&s| s)
}

/// Population standard deviation of the nine values.
pub fn population_std(values: &[f64; MID_BAND_COUNT]) -> f64 {
    let n = MID_BAND_COUNT as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    var.sqrt()
}

/// The nine values sorted ascending.
pub fn sorted_values(values: &[f64; MID_BAND_COUNT]) -> [f64; MID_BAND_COUNT] {
    let mut sorted = *values;
    sorted.sort_by(f64::total_cmp);
    sorted
}
