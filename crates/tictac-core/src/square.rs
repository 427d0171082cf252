//! Board squares, indexed 0..=8 in row-major order.

use std::fmt;

/// A cell position on the 3x3 board.
///
/// Index = row * 3 + column, so the top-left corner is 0 and the
/// bottom-right corner is 8. Positions shown to players are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 9;

    pub const TOP_LEFT: Square = Square(0);
    pub const TOP: Square = Square(1);
    pub const TOP_RIGHT: Square = Square(2);
    pub const LEFT: Square = Square(3);
    pub const CENTER: Square = Square(4);
    pub const RIGHT: Square = Square(5);
    pub const BOTTOM_LEFT: Square = Square(6);
    pub const BOTTOM: Square = Square(7);
    pub const BOTTOM_RIGHT: Square = Square(8);

    /// All squares in index order.
    pub const ALL: [Square; 9] = [
        Square(0),
        Square(1),
        Square(2),
        Square(3),
        Square(4),
        Square(5),
        Square(6),
        Square(7),
        Square(8),
    ];

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < Self::COUNT {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Create a square from a 1-based position as typed by a player.
    #[inline]
    pub const fn from_position(position: usize) -> Option<Square> {
        match position {
            0 => None,
            p => Square::from_index(p - 1),
        }
    }

    /// Return the zero-based index (0..=8).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the 1-based position (1..=9).
    #[inline]
    pub const fn position(self) -> usize {
        self.0 as usize + 1
    }

    /// Return the row (0 = top).
    #[inline]
    pub const fn row(self) -> usize {
        self.0 as usize / 3
    }

    /// Return the column (0 = left).
    #[inline]
    pub const fn column(self) -> usize {
        self.0 as usize % 3
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position())
    }
}
