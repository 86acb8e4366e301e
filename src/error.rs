use std::path::PathBuf;

use crate::game::{Dimensions, Outcome};

/// Errors from dropping a piece onto a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} is not on the board")]
    InvalidColumn(usize),
}

/// Errors that can occur while reading a game file.
///
/// Every variant classifies the whole game; see [`InputError::outcome`].
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read game file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("game file is empty")]
    Empty,

    #[error("dimension line has {0} fields (expected 3)")]
    DimensionCount(usize),

    #[error("dimension '{0}' is not an integer")]
    DimensionNotInteger(String),

    #[error("dimension {0} must be > 0")]
    NonPositiveDimension(i64),

    #[error("dimensions {0} are too large")]
    DimensionTooLarge(String),

    #[error("no line of length {} fits on a {}x{} board", .0.run_length(), .0.columns(), .0.rows())]
    Unwinnable(Dimensions),

    #[error("line {line}: expected a move, found a blank line")]
    BlankMove { line: usize },

    #[error("line {line}: move '{text}' is not an integer")]
    MoveNotInteger { line: usize, text: String },
}

impl InputError {
    /// Outcome reported for a file that fails with this error.
    pub fn outcome(&self) -> Outcome {
        match self {
            InputError::Unreadable { .. } => Outcome::SourceUnavailable,
            InputError::Unwinnable(_) => Outcome::Unwinnable,
            _ => Outcome::MalformedInput,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
