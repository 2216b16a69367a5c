//! 8x8 frequency transform
//!
//! The block DCT used by the marker pipeline:
//! - The orthonormal DCT-II basis matrix (built once, shared process-wide)
//! - Forward transform `basis * block * basis^T`
//! - Inverse transform (transpose, thanks to orthogonality)

/// Orthonormal DCT-II basis construction and process-wide cache
pub mod basis;
/// Forward and inverse 2D block transforms
pub mod dct;

pub use basis::DctBasis;
pub use dct::{dct2, forward, idct2, inverse};
