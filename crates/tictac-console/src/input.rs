//! Parsing of typed moves and replay answers.

use tictac_core::{Board, Square};

use crate::error::InputError;

/// Parse a 1-based position typed by a player into an empty square.
///
/// Surrounding whitespace is ignored. Rejects non-numbers, numbers outside
/// 1..=9, and squares that already hold a mark.
pub fn parse_move(line: &str, board: &Board) -> Result<Square, InputError> {
    let text = line.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    let position: usize = text.parse().map_err(|_| InputError::NotANumber {
        input: text.to_string(),
    })?;
    let sq = Square::from_position(position).ok_or(InputError::OutOfRange { position })?;

    if !board.is_empty(sq) {
        return Err(InputError::Occupied { position });
    }
    Ok(sq)
}

/// Interpret an answer to the replay prompt.
///
/// Only the first character counts: `y`/`Y` is yes, `n`/`N` is no, and
/// anything else is `None` so the caller asks again.
pub fn parse_replay(line: &str) -> Option<bool> {
    match line.trim_start().chars().next() {
        Some('y' | 'Y') => Some(true),
        Some('n' | 'N') => Some(false),
        _ => None,
    }
}
