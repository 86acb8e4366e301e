//! Game file reading and parsing.
//!
//! A game file holds a dimension line `X Y Z` followed by one column number
//! per line. `\n`, `\r\n` and bare `\r` all end a line, and lines are
//! trimmed before parsing. Integers may carry a sign and single `_`
//! separators between digits.

use std::num::{IntErrorKind, ParseIntError};
use std::path::Path;

use tracing::debug;

use crate::error::InputError;
use crate::game::Dimensions;

/// A parsed game file, ready for simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInput {
    pub dims: Dimensions,
    /// Raw one-based column numbers, not yet checked against the board.
    pub moves: Vec<i64>,
}

/// Read and parse a game file.
pub fn load(path: &Path) -> Result<GameInput, InputError> {
    let text = std::fs::read_to_string(path).map_err(|e| InputError::Unreadable {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read game file");
    parse(&text)
}

/// Parse game file contents.
///
/// Unwinnable dimensions are reported before any move line is looked at.
pub fn parse(text: &str) -> Result<GameInput, InputError> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = text.lines().map(str::trim);

    let header = lines.next().ok_or(InputError::Empty)?;
    let dims = parse_dimensions(header)?;
    if !dims.is_winnable() {
        return Err(InputError::Unwinnable(dims));
    }

    let moves = lines
        .enumerate()
        .map(|(i, line)| parse_move(line, i + 2))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GameInput { dims, moves })
}

/// Parse the `X Y Z` line.
pub fn parse_dimensions(line: &str) -> Result<Dimensions, InputError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(InputError::DimensionCount(fields.len()));
    }

    let mut values = [0usize; 3];
    for (slot, field) in values.iter_mut().zip(&fields) {
        let value = match parse_int(field) {
            Ok(v) => v,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => {
                    return Err(InputError::DimensionTooLarge(line.to_string()))
                }
                IntErrorKind::NegOverflow => return Err(InputError::NonPositiveDimension(i64::MIN)),
                _ => return Err(InputError::DimensionNotInteger(field.to_string())),
            },
        };
        if value <= 0 {
            return Err(InputError::NonPositiveDimension(value));
        }
        *slot = usize::try_from(value)
            .map_err(|_| InputError::DimensionTooLarge(line.to_string()))?;
    }

    let [columns, rows, run_length] = values;
    Dimensions::new(columns, rows, run_length).ok_or(InputError::NonPositiveDimension(0))
}

/// Parse one move line. `line_no` is the one-based line in the file.
///
/// Integers beyond 64 bits saturate; they are off the board either way.
pub fn parse_move(line: &str, line_no: usize) -> Result<i64, InputError> {
    if line.is_empty() {
        return Err(InputError::BlankMove { line: line_no });
    }
    match parse_int(line) {
        Ok(v) => Ok(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(InputError::MoveNotInteger {
                line: line_no,
                text: line.to_string(),
            }),
        },
    }
}

/// Decimal integer with optional sign; `_` may separate digits, one at a time.
fn parse_int(text: &str) -> Result<i64, ParseIntError> {
    let digits = text.strip_prefix(|c| c == '+' || c == '-').unwrap_or(text);
    let separated = digits.contains('_')
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__");
    if separated {
        text.replace('_', "").parse()
    } else {
        text.parse()
    }
}
