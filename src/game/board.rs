use std::fmt;

use rustc_hash::FxHashMap;

use super::Dimensions;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

/// Where a dropped piece came to rest. Row 0 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
}

/// A Connect-Z grid with gravity.
///
/// Only occupied cells and non-empty columns are stored, so memory grows
/// with the number of pieces rather than the board size. A column missing
/// from `heights` is empty, and the pieces of column `c` always fill rows
/// `0..heights[c]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dims: Dimensions,
    cells: FxHashMap<Placement, Cell>,
    heights: FxHashMap<usize, usize>,
    pieces: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new(dims: Dimensions) -> Self {
        Board {
            dims,
            cells: FxHashMap::default(),
            heights: FxHashMap::default(),
            pieces: 0,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Get the cell at a specific position.
    ///
    /// Panics if the position is off the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.dims.rows() && col < self.dims.columns(),
            "position ({row}, {col}) is off a {} board",
            self.dims
        );
        self.cells
            .get(&Placement { row, col })
            .copied()
            .unwrap_or(Cell::Empty)
    }

    /// Signed lookup for scans that may walk off an edge.
    pub fn get_checked(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.dims.rows() || col >= self.dims.columns() {
            return None;
        }
        Some(self.get(row, col))
    }

    /// Number of pieces in a column
    pub fn height(&self, col: usize) -> usize {
        self.heights.get(&col).copied().unwrap_or(0)
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.dims.columns() {
            return true;
        }
        self.height(col) >= self.dims.rows()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.pieces as u128 == self.dims.cells()
    }

    /// Total pieces placed so far
    pub fn pieces(&self) -> usize {
        self.pieces
    }

    /// Drop a piece in a zero-based column and return where it landed.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<Placement, MoveError> {
        if col >= self.dims.columns() {
            return Err(MoveError::InvalidColumn(col));
        }
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        let height = self.heights.entry(col).or_insert(0);
        let placement = Placement { row: *height, col };
        *height += 1;
        self.cells.insert(placement, cell);
        self.pieces += 1;

        Ok(placement)
    }
}

impl fmt::Display for Board {
    /// Renders the top row first, one character per cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.dims.rows()).rev() {
            for col in 0..self.dims.columns() {
                let c = match self.get(row, col) {
                    Cell::Empty => '.',
                    Cell::One => '1',
                    Cell::Two => '2',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
