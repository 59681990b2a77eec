use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest supported grid dimension, in either direction.
pub const MAX_GRID_DIM: usize = 64;

/// Construction-time options for the indexer.
///
/// The only recognized option today is the matching policy. The default is
/// case-insensitive: rows are uppercased at construction and every looked-up
/// word goes through the same normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub case_insensitive: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
        }
    }
}

/// Rejected grid shapes. Raised at construction; no index instance exists
/// after any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the grid must have at least one row")]
    EmptyGrid,

    #[error("grid rows cannot be empty")]
    EmptyRow,

    #[error("the grid cannot exceed 64x64 ({rows} rows, width {width})")]
    OversizedGrid { rows: usize, width: usize },

    #[error("row {row} has length {found}, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
}
