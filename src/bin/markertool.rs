use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use sudoku_marker::tools::{
    dataset_limit_from_env, dataset_root_from_env, detect_file, detection_rate, grayscale_stats,
    load_gray_grid, load_rgb,
};
use sudoku_marker::utils::grayscale::rgb_to_grayscale;
use sudoku_marker::{Detector, scan_blocks};

#[derive(Parser)]
#[command(name = "markertool", version, about = "Sudoku marker CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run marker detection on a single image
    Detect {
        #[arg(long)]
        image: PathBuf,
    },
    /// Print luminance stats and every qualifying block for an image
    DebugBlocks {
        #[arg(long)]
        image: PathBuf,
    },
    /// Compute the detection rate over a dataset
    DetectionRate {
        #[arg(long)]
        root: Option<PathBuf>,
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Detect { image } => detect_cmd(&image),
        Command::DebugBlocks { image } => debug_blocks_cmd(&image),
        Command::DetectionRate { root, limit } => detection_rate_cmd(root, limit),
    }
}

fn detect_cmd(image: &Path) {
    let start = Instant::now();
    match detect_file(image) {
        Ok(detected) => {
            println!(
                "Image: {} -> detected={} ({:.1} ms)",
                image.display(),
                detected,
                start.elapsed().as_secs_f64() * 1000.0
            );
        }
        Err(err) => {
            eprintln!("Failed to load image {}: {}", image.display(), err);
        }
    }
}

fn debug_blocks_cmd(image: &Path) {
    let (pixels, width, height) = match load_rgb(image) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Failed to load image {}: {}", image.display(), err);
            return;
        }
    };

    println!("Image: {} ({}x{})", image.display(), width, height);

    let gray = rgb_to_grayscale(&pixels, width, height);
    let stats = grayscale_stats(&gray);
    println!(
        "Grayscale range: {}-{}, average: {}",
        stats.min, stats.max, stats.avg
    );

    let grid = match load_gray_grid(image) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Failed to load image {}: {}", image.display(), err);
            return;
        }
    };

    let blocks = scan_blocks(&grid);
    println!("Found {} qualifying blocks", blocks.len());
    for (i, (x, y)) in blocks.iter().take(10).enumerate() {
        println!("  Block {}: origin=({}, {})", i, x, y);
    }

    let detected = Detector::new().scan_grid(&grid);
    println!("Full detection: detected={}", detected);
}

fn detection_rate_cmd(root: Option<PathBuf>, limit: Option<usize>) {
    let root = root.unwrap_or_else(dataset_root_from_env);
    let limit = limit.or_else(dataset_limit_from_env);

    let start = Instant::now();
    let rate = detection_rate(&root, limit);
    let elapsed = start.elapsed();

    println!("Dataset: {}", root.display());
    println!(
        "Detected {} of {} images ({:.1}%) in {:.2}s",
        rate.detected,
        rate.total,
        if rate.total == 0 {
            0.0
        } else {
            rate.detected as f64 / rate.total as f64 * 100.0
        },
        elapsed.as_secs_f64()
    );
}
