//! Cell contents.

use std::fmt;

use crate::player::Player;

/// The contents of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Return the player whose mark occupies this cell, if any.
    #[inline]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Return `true` if no mark has been placed here.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Parse a notation character: `X`/`O` in either case, `.` or `-` for empty.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            '.' | '-' => Some(Cell::Empty),
            _ => None,
        }
    }

    /// Return the notation character for this cell.
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Cell {
        player.mark()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_of_cell() {
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Cell::X.player(), Some(Player::X));
        assert_eq!(Cell::O.player(), Some(Player::O));
    }

    #[test]
    fn char_roundtrip() {
        for cell in [Cell::Empty, Cell::X, Cell::O] {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
    }

    #[test]
    fn from_char_accepts_lowercase_and_dash() {
        assert_eq!(Cell::from_char('x'), Some(Cell::X));
        assert_eq!(Cell::from_char('o'), Some(Cell::O));
        assert_eq!(Cell::from_char('-'), Some(Cell::Empty));
        assert_eq!(Cell::from_char('0'), None);
        assert_eq!(Cell::from_char('1'), None);
    }

    #[test]
    fn default_is_empty() {
        assert!(Cell::default().is_empty());
    }
}
