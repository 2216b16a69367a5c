use std::fmt;

/// Errors produced by the marker detection core.
///
/// The core has exactly one error condition: a caller handing the 8x8
/// pipeline data of the wrong shape. That is a contract violation by the
/// caller, not a data condition — small images, flat blocks and tied
/// coefficients are all ordinary `false` detection results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    /// Input data did not have the shape the pipeline requires.
    InvalidInput {
        /// What shape the callee required (e.g. "8x8 block").
        expected: &'static str,
        /// Actual width (or element count for flat buffers).
        width: usize,
        /// Actual height (0 for flat buffers).
        height: usize,
    },
}

impl fmt::Display for MarkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerError::InvalidInput {
                expected,
                width,
                height,
            } => {
                write!(f, "invalid input: expected {expected}, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for MarkerError {}
