//! The two sides of a game.

use std::fmt;
use std::ops::Not;

use crate::cell::Cell;

/// A side in the game: X always moves first, O second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    X = 0,
    O = 1,
}

impl Player {
    /// Total number of players.
    pub const COUNT: usize = 2;

    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// Return the index (0 for X, 1 for O).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the other player.
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Return the cell value this player's mark produces.
    #[inline]
    pub const fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Return the player whose turn it is after `turns` moves have been played.
    #[inline]
    pub const fn for_turn(turns: usize) -> Player {
        Player::ALL[turns % Player::COUNT]
    }
}

impl Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Player;
    use crate::cell::Cell;

    #[test]
    fn index_values() {
        assert_eq!(Player::X.index(), 0);
        assert_eq!(Player::O.index(), 1);
    }

    #[test]
    fn opponent_toggles() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(!!Player::X, Player::X);
    }

    #[test]
    fn marks() {
        assert_eq!(Player::X.mark(), Cell::X);
        assert_eq!(Player::O.mark(), Cell::O);
    }

    #[test]
    fn turn_parity() {
        assert_eq!(Player::for_turn(0), Player::X);
        assert_eq!(Player::for_turn(1), Player::O);
        assert_eq!(Player::for_turn(8), Player::X);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Player::X), "X");
        assert_eq!(format!("{}", Player::O), "O");
    }
}
