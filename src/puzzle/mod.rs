//! Puzzle grid model, markup parsing, solving, and rendering.

pub mod parser;
pub mod render;
pub mod solve;

pub use parser::{ParseError, parse_grid};
pub use render::ascii;
pub use solve::Solver;

use thiserror::Error;

/// Side length of the puzzle.
pub const SIZE: usize = 9;

/// Shape or range violations caught at grid construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("expected {SIZE} rows, found {0}")]
    RowCount(usize),
    #[error("expected {SIZE} cells in row {row}, found {found}")]
    CellCount { row: usize, found: usize },
    #[error("cell ({row},{col}) holds {value}, outside 0..=9")]
    ValueRange { row: usize, col: usize, value: u8 },
}

/// A 9×9 matrix of cell values in `[0,9]`; 0 marks an empty cell, 1–9 a
/// given digit. Shape and range are checked once at construction and the
/// grid is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[u8; SIZE]; SIZE],
}

impl Grid {
    /// Build a grid from row-major values, enforcing the 9×9 shape and the
    /// per-cell value range.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        if rows.len() != SIZE {
            return Err(GridError::RowCount(rows.len()));
        }
        let mut cells = [[0u8; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != SIZE {
                return Err(GridError::CellCount {
                    row: r,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if value > 9 {
                    return Err(GridError::ValueRange {
                        row: r,
                        col: c,
                        value,
                    });
                }
                cells[r][c] = value;
            }
        }
        Ok(Self { cells })
    }

    pub(crate) fn from_cells(cells: [[u8; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Value at `(row, col)`, both zero-based.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[[u8; SIZE]; SIZE] {
        &self.cells
    }

    /// Whether every cell carries a digit (no empties left).
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }
}
