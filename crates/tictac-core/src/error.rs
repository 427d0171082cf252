//! Error types for board notation parsing and board validation.

/// Errors that occur when parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// The notation is split into something other than 1 or 3 rows.
    #[error("expected 3 rows separated by '/', found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A `/`-separated row describes more or fewer than 3 cells.
    #[error("row {row_index} describes {length} cells, expected 3")]
    BadRowLength {
        /// Zero-based row index (0 = top).
        row_index: usize,
        /// Number of cells described.
        length: usize,
    },
    /// The notation does not describe exactly 9 cells.
    #[error("expected 9 cells, found {found}")]
    WrongCellCount {
        /// Number of cells found.
        found: usize,
    },
    /// An unrecognized character appeared in the notation.
    #[error("invalid cell character: '{character}'")]
    InvalidCellChar {
        /// The invalid character.
        character: char,
    },
    /// The parsed board fails validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from validating a [`Board`](crate::board::Board) against the rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Mark counts do not follow strict alternation starting with X.
    #[error("X has {x} marks and O has {o}; X must have the same number or one more")]
    TurnOrder {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
    /// Both players hold a completed line.
    #[error("both players have a winning line")]
    BothWin,
}

#[cfg(test)]
mod tests {
    use super::{BoardError, NotationError};

    #[test]
    fn notation_error_display() {
        let err = NotationError::WrongCellCount { found: 8 };
        assert_eq!(format!("{err}"), "expected 9 cells, found 8");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::BothWin;
        assert_eq!(format!("{err}"), "both players have a winning line");
    }

    #[test]
    fn notation_error_from_board_error() {
        let err: NotationError = BoardError::TurnOrder { x: 3, o: 0 }.into();
        assert!(matches!(err, NotationError::InvalidBoard { .. }));
    }
}
