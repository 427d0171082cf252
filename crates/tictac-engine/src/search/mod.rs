//! Move selection by exhaustive minimax.

pub mod minimax;
pub mod ordering;

use tictac_core::{Board, Player, Square};
use tracing::debug;

use minimax::{SearchContext, minimax};
use ordering::MoveOrder;

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The square to play.
    pub best_move: Square,
    /// Game-theoretic value of `best_move` for the searching player:
    /// [`WIN_SCORE`](minimax::WIN_SCORE), [`DRAW_SCORE`](minimax::DRAW_SCORE)
    /// or [`LOSS_SCORE`](minimax::LOSS_SCORE).
    pub score: i32,
    /// Total nodes visited during the search.
    pub nodes: u64,
}

/// Perfect-play searcher.
///
/// Stateless apart from its move order, so one searcher can serve every
/// game in a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct Searcher {
    order: MoveOrder,
}

impl Searcher {
    /// Create a searcher that tries squares in `order`.
    pub fn new(order: MoveOrder) -> Self {
        Self { order }
    }

    /// Return the move order, which is also the tie-break policy.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// Find the best square for `player` on `board`.
    ///
    /// Every empty square is a candidate, tried in move order; the first
    /// candidate with the highest value is chosen. `board` itself is never
    /// touched: the search works on a copy.
    ///
    /// # Panics
    ///
    /// Panics if the board is full. The caller must not search a finished
    /// game.
    pub fn search(&self, board: &Board, player: Player) -> SearchResult {
        assert!(!board.is_full(), "cannot search a full board: {board}");

        let mut scratch = *board;
        let mut ctx = SearchContext {
            nodes: 0,
            me: player,
            order: self.order,
        };

        let mut best_move = None;
        let mut best_score = i32::MIN;

        for &sq in self.order.squares() {
            if !scratch.is_empty(sq) {
                continue;
            }

            scratch.place(sq, player);
            let score = minimax(&mut scratch, !player, false, &mut ctx);
            scratch.take_back(sq);

            if score > best_score {
                best_score = score;
                best_move = Some(sq);
            }
        }

        debug_assert_eq!(scratch, *board, "search must leave no marks behind");

        let result = SearchResult {
            best_move: best_move.expect("a board that is not full has an empty square"),
            score: best_score,
            nodes: ctx.nodes,
        };
        debug!(
            %player,
            board = %board,
            best_move = %result.best_move,
            score = result.score,
            nodes = result.nodes,
            "search complete"
        );
        result
    }
}

/// Best square for `player` using the default center-first searcher.
///
/// # Panics
///
/// Panics if the board is full.
pub fn best_move(board: &Board, player: Player) -> Square {
    Searcher::default().search(board, player).best_move
}
