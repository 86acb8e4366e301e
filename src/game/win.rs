//! Line scanning for the piece that was just placed.

use super::board::{Board, Cell, Placement};

/// One step along each axis: horizontal, vertical, and the two diagonals.
/// The opposite direction is the negated step.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Check if the piece at `placement` completes a run of at least
/// `run_length` along any axis.
pub fn is_winning_placement(board: &Board, placement: Placement, run_length: usize) -> bool {
    longest_run_through(board, placement) >= run_length
}

/// Length of the longest same-colour run that passes through `placement`.
///
/// An empty origin has no run.
pub fn longest_run_through(board: &Board, placement: Placement) -> usize {
    let cell = board.get(placement.row, placement.col);
    if cell == Cell::Empty {
        return 0;
    }

    AXES.iter()
        .map(|&(dr, dc)| {
            1 + extent(board, placement, cell, dr, dc) + extent(board, placement, cell, -dr, -dc)
        })
        .max()
        .unwrap_or(1)
}

/// Count matching cells walking away from the origin, excluding the origin.
fn extent(board: &Board, placement: Placement, cell: Cell, dr: isize, dc: isize) -> usize {
    let mut r = placement.row as isize + dr;
    let mut c = placement.col as isize + dc;
    let mut count = 0;
    while board.get_checked(r, c) == Some(cell) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}
