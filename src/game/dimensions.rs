use std::fmt;

/// Board geometry and the run length needed to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    columns: usize,
    rows: usize,
    run_length: usize,
}

impl Dimensions {
    /// Returns `None` if any dimension is zero.
    pub fn new(columns: usize, rows: usize, run_length: usize) -> Option<Self> {
        if columns == 0 || rows == 0 || run_length == 0 {
            return None;
        }
        Some(Dimensions {
            columns,
            rows,
            run_length,
        })
    }

    /// Board width (X)
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Board height (Y)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Pieces in a row needed to win (Z)
    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Total number of cells, which is also the number of plies in a full game.
    ///
    /// Widened so that `usize::MAX` square boards do not overflow.
    pub fn cells(&self) -> u128 {
        self.columns as u128 * self.rows as u128
    }

    /// A run of `Z` fits along at least one axis.
    ///
    /// Diagonals never beat the longer of the two sides, so checking the
    /// width and height is enough.
    pub fn is_winnable(&self) -> bool {
        self.run_length <= self.columns || self.run_length <= self.rows
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} connect {}", self.columns, self.rows, self.run_length)
    }
}
