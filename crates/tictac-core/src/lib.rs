//! Core tic-tac-toe types: board representation, notation, and game rules.

mod board;
mod cell;
mod error;
mod notation;
pub mod perft;
mod player;
pub mod rules;
mod square;

pub use board::{Board, PrettyBoard};
pub use cell::Cell;
pub use error::{BoardError, NotationError};
pub use notation::EMPTY_BOARD;
pub use player::Player;
pub use rules::{Outcome, WINNING_LINES, is_draw, is_winner, outcome};
pub use square::Square;
