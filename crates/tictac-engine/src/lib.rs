//! Perfect-play move search for tictac.

pub mod error;
pub mod search;

pub use error::EngineError;
pub use search::minimax::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
pub use search::ordering::MoveOrder;
pub use search::{SearchResult, Searcher, best_move};
