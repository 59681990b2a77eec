use crate::index::types::{IndexConfig, MAX_GRID_DIM, ValidationError};

/// A validated rectangular character grid, normalized per the index config.
///
/// Rows are stored as `char` vectors so column derivation and width checks
/// work on characters rather than bytes. Immutable after `parse`.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Grid {
    /// Validate and normalize raw rows into a grid.
    ///
    /// Normalization happens first (uppercase under the default
    /// case-insensitive policy), then shape checks run against the
    /// normalized rows: at least one row, non-empty first row, both
    /// dimensions within [`MAX_GRID_DIM`], all rows the same width.
    pub fn parse<S: AsRef<str>>(raw: &[S], config: &IndexConfig) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::EmptyGrid);
        }

        let rows: Vec<Vec<char>> = raw
            .iter()
            .map(|line| {
                let line = line.as_ref();
                if config.case_insensitive {
                    line.to_uppercase().chars().collect()
                } else {
                    line.chars().collect()
                }
            })
            .collect();

        let width = rows[0].len();
        if width == 0 {
            return Err(ValidationError::EmptyRow);
        }
        if rows.len() > MAX_GRID_DIM || width > MAX_GRID_DIM {
            return Err(ValidationError::OversizedGrid {
                rows: rows.len(),
                width,
            });
        }
        for (i, row) in rows.iter().enumerate().skip(1) {
            if row.len() != width {
                return Err(ValidationError::RaggedGrid {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
        }

        Ok(Self { rows, width })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Upper bound on the length of any contiguous run in the grid.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.height().max(self.width)
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Derive column strings, each read top-to-bottom.
    pub fn columns(&self) -> Vec<Vec<char>> {
        (0..self.width)
            .map(|c| self.rows.iter().map(|row| row[c]).collect())
            .collect()
    }
}
