//! # Connect-Z
//!
//! Validates and scores Connect-Four style games played on an `X` by `Y`
//! board where `Z` in a row wins. A game file is replayed move by move and
//! reduced to a single outcome code.
//!
//! ## Modules
//!
//! - [`game`] — Core logic: board, line scanning, move simulator, outcomes
//! - [`input`] — Game file reading and parsing
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

use std::path::Path;

use tracing::warn;

pub mod config;
pub mod error;
pub mod game;
pub mod input;

use error::InputError;
use game::{simulate, Outcome};

/// Classify game file contents.
pub fn run_source(text: &str) -> Outcome {
    classify(input::parse(text))
}

/// Read and classify a game file.
pub fn run_file(path: &Path) -> Outcome {
    classify(input::load(path))
}

fn classify(parsed: Result<input::GameInput, InputError>) -> Outcome {
    match parsed {
        Ok(game) => simulate(game.dims, game.moves),
        Err(err) => {
            warn!("{err}");
            err.outcome()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::Player;

    #[test]
    fn test_run_source_win() {
        assert_eq!(
            run_source("7 6 4\n1\n2\n1\n2\n1\n2\n1\n"),
            Outcome::Winner(Player::One)
        );
    }

    #[test]
    fn test_run_source_input_errors() {
        assert_eq!(run_source(""), Outcome::MalformedInput);
        assert_eq!(run_source("0 3 3\n"), Outcome::MalformedInput);
        assert_eq!(run_source("3 3 4\n1\n"), Outcome::Unwinnable);
        assert_eq!(run_source("3 3 4\nbad\n"), Outcome::Unwinnable);
        assert_eq!(run_source("7 6 4\n1\n\n"), Outcome::MalformedInput);
    }

    #[test]
    fn test_run_source_saturated_move_is_off_board() {
        assert_eq!(
            run_source("7 6 4\n99999999999999999999999\n"),
            Outcome::IllegalColumn
        );
    }

    #[test]
    fn test_run_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            run_file(&dir.path().join("nope.txt")),
            Outcome::SourceUnavailable
        );
    }
}
