//! End-to-end detection tests
//!
//! These run the full pipeline — RGB bytes through grayscale conversion,
//! block DCT and classification — against synthetic images with a known
//! marker block, and protect the scanner's short-circuit and edge-case
//! behavior.

use sudoku_marker::tools::{marker_luma_image, write_marker_block};
use sudoku_marker::{Detector, GrayGrid, detect, detect_from_grayscale, scan, scan_blocks};

fn luma_to_rgb(luma: &[u8]) -> Vec<u8> {
    luma.iter().flat_map(|&v| [v, v, v]).collect()
}

#[test]
fn test_plain_image_not_detected() {
    let luma = vec![128u8; 320 * 240];
    assert!(!detect_from_grayscale(&luma, 320, 240));
    assert!(!detect(&luma_to_rgb(&luma), 320, 240));
}

#[test]
fn test_marker_detected_end_to_end() {
    // Marker block at origin (x=24, y=16), everything else flat
    let luma = marker_luma_image(320, 240, (24, 16));
    assert!(detect_from_grayscale(&luma, 320, 240));

    // Same image through the RGB front-end
    assert!(detect(&luma_to_rgb(&luma), 320, 240));
}

#[test]
fn test_marker_in_bottom_right_corner() {
    // Short-circuit must not give up before the last block
    let luma = marker_luma_image(320, 240, (312, 232));
    assert!(detect_from_grayscale(&luma, 320, 240));
}

#[test]
fn test_marker_in_partial_margin_not_scanned() {
    // 300 is not a multiple of 8: the last complete block column starts at
    // x=288, so columns 296..299 are never analyzed. Marker content that
    // only lives there stays invisible.
    let mut luma = vec![128u8; 300 * 240];
    let block = marker_luma_image(8, 8, (0, 0));
    for row in 0..8 {
        for col in 0..4 {
            luma[(96 + row) * 300 + 296 + col] = block[row * 8 + col];
        }
    }
    assert!(!detect_from_grayscale(&luma, 300, 240));
}

#[test]
fn test_images_too_small_for_any_block() {
    assert!(!detect_from_grayscale(&vec![128u8; 7 * 100], 7, 100));
    assert!(!detect_from_grayscale(&vec![128u8; 100 * 7], 100, 7));
    assert!(!detect_from_grayscale(&[], 0, 0));
}

#[test]
fn test_two_markers_same_result() {
    // The boolean is existential: which qualifying block comes first in
    // raster order must not matter
    let mut grid = GrayGrid::from_samples(vec![128.0; 320 * 240], 320, 240).unwrap();
    write_marker_block(&mut grid, 24, 16);
    assert!(scan(&grid));

    write_marker_block(&mut grid, 200, 120);
    assert!(scan(&grid));
    assert_eq!(scan_blocks(&grid), vec![(24, 16), (200, 120)]);
}

#[test]
fn test_detector_strategies_agree_on_large_image() {
    let luma = marker_luma_image(1024, 768, (512, 384));
    let grid = GrayGrid::from_luma(&luma, 1024, 768).unwrap();

    assert!(Detector::sequential().scan_grid(&grid));
    assert!(Detector::parallel().scan_grid(&grid));
    assert!(Detector::new().scan_grid(&grid));

    let plain = GrayGrid::from_samples(vec![64.0; 1024 * 768], 1024, 768).unwrap();
    assert!(!Detector::sequential().scan_grid(&plain));
    assert!(!Detector::parallel().scan_grid(&plain));
}

#[test]
fn test_detection_survives_png_round_trip() {
    // Write the synthetic marker image out as a PNG (lossless) and run the
    // file-based entry point on it
    let luma = marker_luma_image(128, 96, (40, 48));
    let dir = std::env::temp_dir().join("sudoku_marker_tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("marker_128x96.png");

    image::save_buffer(
        &path,
        &luma,
        128,
        96,
        image::ColorType::L8,
    )
    .unwrap();

    let detected = sudoku_marker::tools::detect_file(&path).unwrap();
    assert!(detected);

    std::fs::remove_file(&path).ok();
}
