pub mod block;
pub mod grid;

pub use block::{BLOCK_SIZE, CoefficientGrid, PixelBlock};
pub use grid::GrayGrid;
