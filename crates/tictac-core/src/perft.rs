//! Game-tree enumeration for verifying the rules.

use crate::board::Board;
use crate::rules::outcome;

/// Count the positions reachable in exactly `depth` moves.
///
/// Depth 0 returns 1. Finished games have no moves, so a line that ends
/// before `depth` contributes nothing.
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }
    if outcome(board).is_terminal() {
        return 0;
    }

    let side = board.side_to_move();
    if depth == 1 {
        return board.empty_squares().count() as u64;
    }

    board
        .empty_squares()
        .map(|sq| {
            let mut child = *board;
            child.place(sq, side);
            perft(&child, depth - 1)
        })
        .sum()
}

/// Count every distinct complete game playable from this position.
///
/// A finished position counts as one game.
pub fn count_games(board: &Board) -> u64 {
    if outcome(board).is_terminal() {
        return 1;
    }

    let side = board.side_to_move();
    board
        .empty_squares()
        .map(|sq| {
            let mut child = *board;
            child.place(sq, side);
            count_games(&child)
        })
        .sum()
}
