pub mod build;
pub mod grid;
pub mod types;

pub use build::GridIndex;
pub use grid::Grid;
pub use types::{IndexConfig, MAX_GRID_DIM, ValidationError};
