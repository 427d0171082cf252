//! Win and draw detection.

use std::fmt;

use crate::board::Board;
use crate::player::Player;
use crate::square::Square;

/// The eight lines that win the game: three rows, three columns, two diagonals.
pub const WINNING_LINES: [[Square; 3]; 8] = [
    // rows
    [Square::TOP_LEFT, Square::TOP, Square::TOP_RIGHT],
    [Square::LEFT, Square::CENTER, Square::RIGHT],
    [Square::BOTTOM_LEFT, Square::BOTTOM, Square::BOTTOM_RIGHT],
    // columns
    [Square::TOP_LEFT, Square::LEFT, Square::BOTTOM_LEFT],
    [Square::TOP, Square::CENTER, Square::BOTTOM],
    [Square::TOP_RIGHT, Square::RIGHT, Square::BOTTOM_RIGHT],
    // diagonals
    [Square::TOP_LEFT, Square::CENTER, Square::BOTTOM_RIGHT],
    [Square::TOP_RIGHT, Square::CENTER, Square::BOTTOM_LEFT],
];

/// The state of a game as read off its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Empty cells remain and nobody has a line.
    InProgress,
    /// The player completed a line.
    Won(Player),
    /// The board is full and nobody has a line.
    Draw,
}

impl Outcome {
    /// Return `true` if the game is over.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Return the winner, if any.
    #[inline]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won(player) => write!(f, "{player} won"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Return `true` if `player` holds all three squares of any winning line.
pub fn is_winner(board: &Board, player: Player) -> bool {
    let mark = player.mark();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&sq| board.cell(sq) == mark))
}

/// Return `true` if the board is full and neither player has a line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !Player::ALL.iter().any(|&p| is_winner(board, p))
}

/// Classify the board.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(player) = Player::ALL.into_iter().find(|&p| is_winner(board, p)) {
        return Outcome::Won(player);
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
