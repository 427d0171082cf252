//! Exhaustive minimax over the remaining game tree.

use tictac_core::{Board, Player, is_winner};

use crate::search::ordering::MoveOrder;

/// Score for a position the searching player has won.
pub const WIN_SCORE: i32 = 2;

/// Score for a position the searching player has lost.
pub const LOSS_SCORE: i32 = -2;

/// Score for a full board with no line.
pub const DRAW_SCORE: i32 = 0;

/// Minimax value of `board` for `ctx.me`, with `to_move` about to play.
///
/// `maximizing` is true exactly when `to_move` is `ctx.me`. Every
/// hypothetical placement is taken back before returning, so `board`
/// leaves this call as it entered.
pub(super) fn minimax(
    board: &mut Board,
    to_move: Player,
    maximizing: bool,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.nodes += 1;

    if is_winner(board, ctx.me) {
        return WIN_SCORE;
    }
    if is_winner(board, !ctx.me) {
        return LOSS_SCORE;
    }
    if board.is_full() {
        return DRAW_SCORE;
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for &sq in ctx.order.squares() {
        if !board.is_empty(sq) {
            continue;
        }

        board.place(sq, to_move);
        let score = minimax(board, !to_move, !maximizing, ctx);
        board.take_back(sq);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Search state threaded through minimax calls.
pub(super) struct SearchContext {
    /// Total nodes visited.
    pub nodes: u64,
    /// The player the search is choosing a move for.
    pub me: Player,
    /// Order in which empty squares are tried.
    pub order: MoveOrder,
}
