//! Utility functions for image preprocessing
//!
//! The scanner core consumes a numeric luminance grid; these helpers cover
//! the step right before it: collapsing RGB/RGBA pixel data to 8-bit luma,
//! with sequential and rayon-parallel variants.

pub mod grayscale;
