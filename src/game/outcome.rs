use std::fmt;

use super::Player;
use crate::error::MoveError;

/// The single classification produced for one game file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Draw,
    Winner(Player),
    Incomplete,
    IllegalContinue,
    IllegalColumnFull,
    IllegalColumn,
    Unwinnable,
    MalformedInput,
    SourceUnavailable,
}

impl Outcome {
    /// Numeric code printed by the command line tool.
    pub fn code(self) -> u8 {
        match self {
            Outcome::Draw => 0,
            Outcome::Winner(player) => player.number(),
            Outcome::Incomplete => 3,
            Outcome::IllegalContinue => 4,
            Outcome::IllegalColumnFull => 5,
            Outcome::IllegalColumn => 6,
            Outcome::Unwinnable => 7,
            Outcome::MalformedInput => 8,
            Outcome::SourceUnavailable => 9,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Outcome::Draw => "draw: the board is full and nobody connected",
            Outcome::Winner(Player::One) => "player 1 wins",
            Outcome::Winner(Player::Two) => "player 2 wins",
            Outcome::Incomplete => "incomplete: moves ran out before the game finished",
            Outcome::IllegalContinue => "illegal continue: a move was played after the game was won",
            Outcome::IllegalColumnFull => "illegal move: the column is already full",
            Outcome::IllegalColumn => "illegal move: the column is not on the board",
            Outcome::Unwinnable => "illegal game: no line of the required length fits on the board",
            Outcome::MalformedInput => "invalid file: the game file is malformed",
            Outcome::SourceUnavailable => "file error: the game file could not be read",
        }
    }
}

impl From<MoveError> for Outcome {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::ColumnFull(_) => Outcome::IllegalColumnFull,
            MoveError::InvalidColumn(_) => Outcome::IllegalColumn,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
