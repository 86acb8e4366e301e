use tracing::{debug, trace};

use super::board::{Board, Placement};
use super::win::is_winning_placement;
use super::{Dimensions, Outcome, Player};

/// Boards up to this many cells are rendered in trace output.
const TRACE_RENDER_CELLS: u128 = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Playing,
    /// `at` is the zero-based index of the winning move.
    Won { player: Player, at: usize },
    Done(Outcome),
}

/// Replays a move list one ply at a time.
///
/// A win is only legal as the last move: any move after it is an illegal
/// continuation, whatever its column. Otherwise each move is checked for
/// column range and then column capacity. The first violation ends the
/// game and every later call to [`GameSimulator::play`] returns it again.
#[derive(Debug, Clone)]
pub struct GameSimulator {
    board: Board,
    current_player: Player,
    phase: Phase,
}

impl GameSimulator {
    /// Start a game. Unwinnable dimensions finish it before any move.
    pub fn new(dims: Dimensions) -> Self {
        let phase = if dims.is_winnable() {
            Phase::Playing
        } else {
            debug!(%dims, "no run of the required length fits");
            Phase::Done(Outcome::Unwinnable)
        };

        GameSimulator {
            board: Board::new(dims),
            current_player: Player::One,
            phase,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player due to move next
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Number of legal moves applied so far
    pub fn moves_played(&self) -> usize {
        self.board.pieces()
    }

    /// Winning player and move index, once somebody has connected.
    pub fn winner(&self) -> Option<(Player, usize)> {
        match self.phase {
            Phase::Won { player, at } => Some((player, at)),
            _ => None,
        }
    }

    /// The terminal classification, if one has been produced.
    pub fn violation(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Done(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Play a one-based column number.
    ///
    /// Returns where the piece landed, or the terminal outcome if this move
    /// is illegal or the game had already ended on a violation.
    pub fn play(&mut self, column: i64) -> Result<Placement, Outcome> {
        if let Phase::Done(outcome) = self.phase {
            return Err(outcome);
        }

        let dims = self.board.dimensions();
        let index = self.board.pieces();

        if let Phase::Won { .. } = self.phase {
            return Err(self.end(Outcome::IllegalContinue, index, column));
        }

        let col = match usize::try_from(column) {
            Ok(c) if (1..=dims.columns()).contains(&c) => c - 1,
            _ => return Err(self.end(Outcome::IllegalColumn, index, column)),
        };

        if self.board.is_column_full(col) {
            return Err(self.end(Outcome::IllegalColumnFull, index, column));
        }

        let player = self.current_player;
        let placement = self
            .board
            .drop_piece(col, player.to_cell())
            .map_err(|e| self.end(e.into(), index, column))?;

        if is_winning_placement(&self.board, placement, dims.run_length()) {
            debug!(
                player = player.number(),
                index,
                row = placement.row,
                col = placement.col,
                "winning placement"
            );
            self.phase = Phase::Won { player, at: index };
        } else {
            debug!(
                player = player.number(),
                index,
                row = placement.row,
                col = placement.col,
                "placed"
            );
        }

        self.current_player = player.other();
        Ok(placement)
    }

    /// Classify the game once the move list is exhausted.
    pub fn finish(self) -> Outcome {
        if self.board.dimensions().cells() <= TRACE_RENDER_CELLS {
            trace!(board = %self.board, "final position");
        }
        match self.phase {
            Phase::Done(outcome) => outcome,
            Phase::Won { player, .. } => Outcome::Winner(player),
            Phase::Playing if self.board.is_full() => Outcome::Draw,
            Phase::Playing => Outcome::Incomplete,
        }
    }

    fn end(&mut self, outcome: Outcome, index: usize, column: i64) -> Outcome {
        debug!(index, column, code = outcome.code(), "move rejected");
        self.phase = Phase::Done(outcome);
        outcome
    }
}

/// Run a whole move list and return its outcome.
///
/// Stops at the first illegal move; later moves are never inspected.
pub fn simulate<I>(dims: Dimensions, moves: I) -> Outcome
where
    I: IntoIterator<Item = i64>,
{
    let mut sim = GameSimulator::new(dims);
    for column in moves {
        if let Err(outcome) = sim.play(column) {
            return outcome;
        }
    }
    sim.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use proptest::prelude::*;

    fn dims(columns: usize, rows: usize, run_length: usize) -> Dimensions {
        Dimensions::new(columns, rows, run_length).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let sim = GameSimulator::new(dims(7, 6, 4));
        assert_eq!(sim.current_player(), Player::One);
        assert_eq!(sim.moves_played(), 0);
        assert_eq!(sim.winner(), None);
        assert_eq!(sim.violation(), None);
    }

    #[test]
    fn test_play_alternates_players() {
        let mut sim = GameSimulator::new(dims(7, 6, 4));
        let p = sim.play(4).unwrap();
        assert_eq!(p, Placement { row: 0, col: 3 });
        assert_eq!(sim.current_player(), Player::Two);
        assert_eq!(sim.board().get(0, 3), Cell::One);

        sim.play(4).unwrap();
        assert_eq!(sim.current_player(), Player::One);
        assert_eq!(sim.board().get(1, 3), Cell::Two);
    }

    #[test]
    fn test_vertical_win_for_player_one() {
        assert_eq!(
            simulate(dims(7, 6, 4), [1, 2, 1, 2, 1, 2, 1]),
            Outcome::Winner(Player::One)
        );
    }

    #[test]
    fn test_win_for_player_two() {
        assert_eq!(
            simulate(dims(7, 6, 4), [1, 2, 1, 2, 1, 2, 3, 2]),
            Outcome::Winner(Player::Two)
        );
    }

    #[test]
    fn test_winner_records_move_index() {
        let mut sim = GameSimulator::new(dims(7, 6, 4));
        for column in [1, 2, 1, 2, 1, 2, 1] {
            sim.play(column).unwrap();
        }
        assert_eq!(sim.winner(), Some((Player::One, 6)));
    }

    #[test]
    fn test_draw_on_full_board() {
        // Final position (bottom row first): 1 1 2 / 2 2 1 / 1 1 2
        assert_eq!(
            simulate(dims(3, 3, 3), [1, 1, 1, 3, 3, 3, 2, 2, 2]),
            Outcome::Draw
        );
    }

    #[test]
    fn test_run_one_short_on_full_board_is_draw() {
        // Two-in-a-row exists but three is needed
        assert_eq!(simulate(dims(3, 1, 3), [1, 3, 2]), Outcome::Draw);
    }

    #[test]
    fn test_incomplete() {
        assert_eq!(simulate(dims(7, 6, 4), [1, 2, 1]), Outcome::Incomplete);
        assert_eq!(simulate(dims(7, 6, 4), []), Outcome::Incomplete);
    }

    #[test]
    fn test_run_one_short_is_incomplete() {
        assert_eq!(
            simulate(dims(7, 6, 4), [1, 2, 1, 2, 1]),
            Outcome::Incomplete
        );
    }

    #[test]
    fn test_move_after_win_is_illegal_continue() {
        assert_eq!(
            simulate(dims(7, 6, 4), [1, 2, 1, 2, 1, 2, 1, 3]),
            Outcome::IllegalContinue
        );
    }

    #[test]
    fn test_win_on_final_move_is_tolerated() {
        assert_eq!(simulate(dims(2, 1, 1), [1]), Outcome::Winner(Player::One));
        assert_eq!(simulate(dims(2, 1, 1), [1, 2]), Outcome::IllegalContinue);
    }

    #[test]
    fn test_column_full() {
        assert_eq!(
            simulate(dims(3, 3, 3), [1, 1, 1, 1, 1, 1, 1, 1, 1]),
            Outcome::IllegalColumnFull
        );
    }

    #[test]
    fn test_column_out_of_range() {
        assert_eq!(simulate(dims(7, 6, 4), [0]), Outcome::IllegalColumn);
        assert_eq!(simulate(dims(7, 6, 4), [-1]), Outcome::IllegalColumn);
        assert_eq!(simulate(dims(7, 6, 4), [8]), Outcome::IllegalColumn);
        assert_eq!(simulate(dims(7, 6, 4), [1, 2, 8]), Outcome::IllegalColumn);
        assert_eq!(simulate(dims(7, 6, 4), [i64::MAX]), Outcome::IllegalColumn);
    }

    #[test]
    fn test_off_board_move_after_win_is_illegal_continue() {
        assert_eq!(
            simulate(dims(7, 6, 4), [1, 2, 1, 2, 1, 2, 1, 9]),
            Outcome::IllegalContinue
        );
        assert_eq!(
            simulate(dims(7, 6, 4), [1, 2, 1, 2, 1, 2, 1, 0]),
            Outcome::IllegalContinue
        );
    }

    #[test]
    fn test_full_column_move_after_win_is_illegal_continue() {
        // Player one connects two along the bottom on move 3; column 1 is
        // already full when move 4 arrives.
        assert_eq!(
            simulate(dims(7, 2, 2), [1, 1, 2, 1]),
            Outcome::IllegalContinue
        );
        assert_eq!(simulate(dims(7, 2, 2), [1, 1, 2, 3]), Outcome::IllegalContinue);
    }

    #[test]
    fn test_first_violation_wins() {
        assert_eq!(simulate(dims(1, 1, 1), [1, 1, 0]), Outcome::IllegalContinue);
        assert_eq!(simulate(dims(2, 1, 2), [1, 1, 0]), Outcome::IllegalColumnFull);
    }

    #[test]
    fn test_win_filling_last_cell_beats_draw() {
        // Bottom row ends 1 1 2 with player one connecting on the last cell
        assert_eq!(simulate(dims(3, 1, 2), [1, 3, 2]), Outcome::Winner(Player::One));
        // Bottom row ends 1 2 2 1 with player two connecting on the last cell
        assert_eq!(
            simulate(dims(4, 1, 2), [1, 3, 4, 2]),
            Outcome::Winner(Player::Two)
        );
    }

    #[test]
    fn test_huge_board_is_incomplete() {
        let huge = dims(usize::MAX, usize::MAX, 4);
        assert_eq!(simulate(huge, [1, 2, 1]), Outcome::Incomplete);
        assert_eq!(simulate(huge, [i64::MAX]), Outcome::Incomplete);
    }

    #[test]
    fn test_unwinnable_ignores_moves() {
        assert_eq!(simulate(dims(3, 3, 4), []), Outcome::Unwinnable);
        assert_eq!(simulate(dims(3, 3, 4), [0, 99]), Outcome::Unwinnable);
    }

    #[test]
    fn test_play_after_violation_repeats_outcome() {
        let mut sim = GameSimulator::new(dims(7, 6, 4));
        assert_eq!(sim.play(0), Err(Outcome::IllegalColumn));
        assert_eq!(sim.play(1), Err(Outcome::IllegalColumn));
        assert_eq!(sim.moves_played(), 0);
        assert_eq!(sim.violation(), Some(Outcome::IllegalColumn));
        assert_eq!(sim.finish(), Outcome::IllegalColumn);
    }

    #[test]
    fn test_connect_one_single_cell() {
        assert_eq!(simulate(dims(1, 1, 1), [1]), Outcome::Winner(Player::One));
        assert_eq!(simulate(dims(1, 1, 1), []), Outcome::Incomplete);
    }

    proptest! {
        #[test]
        fn test_unwinnable_always_seven(
            columns in 1usize..6,
            rows in 1usize..6,
            extra in 1usize..4,
            moves in prop::collection::vec(-3i64..10, 0..20),
        ) {
            let run_length = columns.max(rows) + extra;
            prop_assert_eq!(
                simulate(dims(columns, rows, run_length), moves),
                Outcome::Unwinnable
            );
        }

        #[test]
        fn test_out_of_range_first_move(
            columns in 1usize..10,
            offset in 1i64..1000,
            below in any::<bool>(),
        ) {
            let column = if below { 1 - offset } else { columns as i64 + offset };
            prop_assert_eq!(
                simulate(dims(columns, 4, 1), [column, 1]),
                Outcome::IllegalColumn
            );
        }

        #[test]
        fn test_connect_one_wins_immediately(columns in 1usize..8, rows in 1usize..8) {
            prop_assert_eq!(
                simulate(dims(columns, rows, 1), [1]),
                Outcome::Winner(Player::One)
            );
        }
    }
}
