pub mod grid;

// Re-export the conversion engine so front ends only need this crate
pub use tupper_engine::{CELL_COUNT, EngineError, HEIGHT, PixelMatrix, Result, SCALE, TUPPER_K, WIDTH, codec};
