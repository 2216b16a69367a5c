/// Convert RGB/RGBA images to 8-bit luma before scanning
/// Y = 0.299*R + 0.587*G + 0.114*B
/// Uses fast integer arithmetic: Y = (76*R + 150*G + 29*B) >> 8
use rayon::prelude::*;

/// Coefficients for grayscale conversion: Y = (76*R + 150*G + 29*B) >> 8
const COEF_R: i32 = 76;
const COEF_G: i32 = 150;
const COEF_B: i32 = 29;

#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    let lum = (COEF_R * r as i32 + COEF_G * g as i32 + COEF_B * b as i32) >> 8;
    lum.min(255) as u8
}

/// Convert an RGB image (3 bytes per pixel) to grayscale.
pub fn rgb_to_grayscale(rgb: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    let mut gray = vec![0u8; pixel_count];

    let mut i = 0;
    // Process 8 pixels at a time with manual unrolling
    while i + 8 <= pixel_count {
        for j in 0..8 {
            let idx = (i + j) * 3;
            gray[i + j] = luma(rgb[idx], rgb[idx + 1], rgb[idx + 2]);
        }
        i += 8;
    }
    // Process remaining pixels
    for i in i..pixel_count {
        let idx = i * 3;
        gray[i] = luma(rgb[idx], rgb[idx + 1], rgb[idx + 2]);
    }

    gray
}

/// Convert an RGBA image to grayscale (ignores the alpha channel).
pub fn rgba_to_grayscale(rgba: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    let mut gray = vec![0u8; pixel_count];

    let mut i = 0;
    while i + 8 <= pixel_count {
        for j in 0..8 {
            let idx = (i + j) * 4;
            gray[i + j] = luma(rgba[idx], rgba[idx + 1], rgba[idx + 2]);
        }
        i += 8;
    }
    for i in i..pixel_count {
        let idx = i * 4;
        gray[i] = luma(rgba[idx], rgba[idx + 1], rgba[idx + 2]);
    }

    gray
}

/// Convert RGB to grayscale using parallel processing
/// Processes rows in parallel for multi-core speedup
pub fn rgb_to_grayscale_parallel(rgb: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    let mut gray = vec![0u8; pixel_count];

    gray.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let row_start = y * width * 3;
        for (x, out) in row.iter_mut().enumerate() {
            let idx = row_start + x * 3;
            *out = luma(rgb[idx], rgb[idx + 1], rgb[idx + 2]);
        }
    });

    gray
}

/// Convert RGBA to grayscale using parallel processing
pub fn rgba_to_grayscale_parallel(rgba: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    let mut gray = vec![0u8; pixel_count];

    gray.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let row_start = y * width * 4;
        for (x, out) in row.iter_mut().enumerate() {
            let idx = row_start + x * 4;
            *out = luma(rgba[idx], rgba[idx + 1], rgba[idx + 2]);
        }
    });

    gray
}
