//! The 3x3 board: cell occupancy, placement, and validation.

use std::fmt;

use crate::cell::Cell;
use crate::error::BoardError;
use crate::player::Player;
use crate::rules;
use crate::square::Square;

/// Nine cells in row-major order.
///
/// The board does not track whose turn it is; that is derived from the
/// mark counts, since X always moves first and turns strictly alternate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; Square::COUNT],
}

impl Board {
    /// Return an empty board.
    pub const fn new() -> Board {
        Board {
            cells: [Cell::Empty; Square::COUNT],
        }
    }

    /// Construct a board from raw cells. Used by notation parsing.
    pub(crate) const fn from_cells(cells: [Cell; Square::COUNT]) -> Board {
        Board { cells }
    }

    /// Return the contents of the given square.
    #[inline]
    pub fn cell(&self, sq: Square) -> Cell {
        self.cells[sq.index()]
    }

    /// Return all nine cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell; Square::COUNT] {
        &self.cells
    }

    /// Return `true` if no mark has been placed on the square.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_empty()
    }

    /// Place `player`'s mark on the square.
    ///
    /// The square must be empty; callers check [`is_empty`](Self::is_empty) first.
    #[inline]
    pub fn place(&mut self, sq: Square, player: Player) {
        debug_assert!(self.is_empty(sq), "square {sq} is already occupied");
        self.cells[sq.index()] = player.mark();
    }

    /// Clear a mark placed by [`place`](Self::place).
    ///
    /// Only used to undo hypothetical moves while searching; a real game
    /// never clears a cell.
    #[inline]
    pub fn take_back(&mut self, sq: Square) {
        debug_assert!(!self.is_empty(sq), "square {sq} is already empty");
        self.cells[sq.index()] = Cell::Empty;
    }

    /// Return `true` if no cell is empty.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        let mark = player.mark();
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Number of marks placed so far.
    pub fn moves_played(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Iterate over the empty squares in index order.
    pub fn empty_squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::ALL.into_iter().filter(|&sq| self.is_empty(sq))
    }

    /// Return the player whose turn it is.
    #[inline]
    pub fn side_to_move(&self) -> Player {
        Player::for_turn(self.moves_played())
    }

    /// Check the board could have been reached by legal play.
    pub fn validate(&self) -> Result<(), BoardError> {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        if x != o && x != o + 1 {
            return Err(BoardError::TurnOrder { x, o });
        }

        if rules::is_winner(self, Player::X) && rules::is_winner(self, Player::O) {
            return Err(BoardError::BothWin);
        }

        Ok(())
    }

    /// Return a printable wrapper showing marks and 1-based positions.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Board rendering for players: marks where placed, position numbers elsewhere.
///
/// ```text
/// X 2 3
/// 4 O 6
/// 7 8 9
/// ```
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in Square::ALL {
            if sq.column() == 0 && sq.row() > 0 {
                writeln!(f)?;
            } else if sq.column() > 0 {
                write!(f, " ")?;
            }
            match self.0.cell(sq).player() {
                Some(player) => write!(f, "{player}")?,
                None => write!(f, "{}", sq.position())?,
            }
        }
        Ok(())
    }
}
