//! Text notation for [`Board`]: nine cell characters, optionally split into rows by `/`.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::cell::Cell;
use crate::error::NotationError;
use crate::square::Square;

/// Notation for the empty board.
pub const EMPTY_BOARD: &str = ".../.../...";

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Board, NotationError> {
        let s = s.trim();
        let rows: Vec<&str> = s.split('/').collect();
        match rows.len() {
            1 => {}
            3 => {
                for (row_index, row) in rows.iter().enumerate() {
                    let length = row.chars().count();
                    if length != 3 {
                        return Err(NotationError::BadRowLength { row_index, length });
                    }
                }
            }
            found => return Err(NotationError::WrongRowCount { found }),
        }

        let found = s.chars().filter(|&c| c != '/').count();
        if found != Square::COUNT {
            return Err(NotationError::WrongCellCount { found });
        }

        let mut cells = [Cell::Empty; Square::COUNT];
        for (slot, c) in cells.iter_mut().zip(s.chars().filter(|&c| c != '/')) {
            *slot = Cell::from_char(c).ok_or(NotationError::InvalidCellChar { character: c })?;
        }

        let board = Board::from_cells(cells);
        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in Square::ALL {
            if sq.column() == 0 && sq.row() > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", self.cell(sq))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::player::Player;

    #[test]
    fn parse_empty() {
        let board: Board = EMPTY_BOARD.parse().unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn parse_without_separators() {
        let a: Board = "XO.......".parse().unwrap();
        let b: Board = "XO./.../...".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cell(Square::TOP_LEFT), Cell::X);
        assert_eq!(a.cell(Square::TOP), Cell::O);
    }

    #[test]
    fn parse_is_case_insensitive() {
        let board: Board = "x-o/---/---".parse().unwrap();
        assert_eq!(board.count(Player::X), 1);
        assert_eq!(board.count(Player::O), 1);
    }

    #[test]
    fn display_matches_parse() {
        let text = "XOX/.O./..X";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.to_string(), text);
    }

    #[test]
    fn wrong_row_count() {
        let err = "XO./...".parse::<Board>().unwrap_err();
        assert_eq!(err, NotationError::WrongRowCount { found: 2 });
    }

    #[test]
    fn bad_row_length() {
        let err = "XO../../...".parse::<Board>().unwrap_err();
        assert_eq!(err, NotationError::BadRowLength { row_index: 0, length: 4 });
    }

    #[test]
    fn wrong_cell_count() {
        let err = "XO.....".parse::<Board>().unwrap_err();
        assert_eq!(err, NotationError::WrongCellCount { found: 7 });
    }

    #[test]
    fn invalid_char() {
        let err = "XO?/.../...".parse::<Board>().unwrap_err();
        assert_eq!(err, NotationError::InvalidCellChar { character: '?' });
    }

    #[test]
    fn invalid_turn_order() {
        let err = "XXX/.../...".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            NotationError::InvalidBoard {
                source: BoardError::TurnOrder { x: 3, o: 0 }
            }
        );
    }
}
