//! Integration tests for perfect play.
//!
//! Verifies the searcher against every opponent line: it never loses,
//! draws itself, and converts positions that are won.

use std::collections::HashSet;

use tictac_core::{Board, Outcome, Player, outcome};
use tictac_engine::{DRAW_SCORE, MoveOrder, Searcher, WIN_SCORE};

const ORDERS: [MoveOrder; 2] = [MoveOrder::CenterFirst, MoveOrder::Ascending];

/// Helper: play the searcher against itself from `board`.
fn self_play(searcher: &Searcher, mut board: Board) -> Outcome {
    loop {
        let result = outcome(&board);
        if result.is_terminal() {
            return result;
        }
        let side = board.side_to_move();
        let mv = searcher.search(&board, side).best_move;
        board.place(mv, side);
    }
}

/// Helper: let the opponent try every reply while `computer` answers with
/// the searcher. Collects every finished game's outcome.
fn all_replies(searcher: &Searcher, board: Board, computer: Player, results: &mut Vec<Outcome>) {
    let result = outcome(&board);
    if result.is_terminal() {
        results.push(result);
        return;
    }

    let side = board.side_to_move();
    if side == computer {
        let mut child = board;
        child.place(searcher.search(&board, side).best_move, side);
        all_replies(searcher, child, computer, results);
    } else {
        for sq in board.empty_squares() {
            let mut child = board;
            child.place(sq, side);
            all_replies(searcher, child, computer, results);
        }
    }
}

// ── Self-play ─────────────────────────────────────────────────────────────────

#[test]
fn self_play_from_empty_is_a_draw() {
    for order in ORDERS {
        let searcher = Searcher::new(order);
        assert_eq!(
            self_play(&searcher, Board::new()),
            Outcome::Draw,
            "{order} self-play should draw"
        );
    }
}

#[test]
fn first_move_is_stable() {
    let searcher = Searcher::default();
    let first = searcher.search(&Board::new(), Player::X);
    let second = searcher.search(&Board::new(), Player::X);
    assert_eq!(first, second);
}

// ── Never loses ───────────────────────────────────────────────────────────────

#[test]
fn never_loses_as_x() {
    for order in ORDERS {
        let searcher = Searcher::new(order);
        let mut results = Vec::new();
        all_replies(&searcher, Board::new(), Player::X, &mut results);
        assert!(!results.is_empty());
        assert!(
            !results.contains(&Outcome::Won(Player::O)),
            "{order}: O beat the searcher"
        );
    }
}

#[test]
fn never_loses_as_o() {
    for order in ORDERS {
        let searcher = Searcher::new(order);
        let mut results = Vec::new();
        all_replies(&searcher, Board::new(), Player::O, &mut results);
        assert!(!results.is_empty());
        assert!(
            !results.contains(&Outcome::Won(Player::X)),
            "{order}: X beat the searcher"
        );
    }
}

// ── Converting won positions ──────────────────────────────────────────────────

#[test]
fn center_then_edge_reply_is_a_forced_win() {
    // X took the center, O answered on an edge.
    let board: Board = ".O./.X./...".parse().unwrap();
    let searcher = Searcher::default();
    assert_eq!(searcher.search(&board, Player::X).score, WIN_SCORE);

    let mut results = Vec::new();
    all_replies(&searcher, board, Player::X, &mut results);
    assert!(
        results.iter().all(|&r| r == Outcome::Won(Player::X)),
        "X should win every line, got {results:?}"
    );
}

#[test]
fn center_then_corner_reply_holds_the_draw() {
    // The corner is O's correct answer to the center.
    let board: Board = "O../.X./...".parse().unwrap();
    let searcher = Searcher::default();
    assert_eq!(searcher.search(&board, Player::X).score, DRAW_SCORE);

    let mut results = Vec::new();
    all_replies(&searcher, board, Player::X, &mut results);
    assert!(!results.contains(&Outcome::Won(Player::O)));
}

// ── Contract ──────────────────────────────────────────────────────────────────

#[test]
fn every_reachable_position_gets_an_empty_square() {
    let searcher = Searcher::default();
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        let result = outcome(&board);
        assert!(
            !(tictac_core::is_winner(&board, Player::X) && tictac_core::is_winner(&board, Player::O)),
            "both players won on {board}"
        );
        if result.is_terminal() {
            continue;
        }

        let side = board.side_to_move();
        let before = board;
        let mv = searcher.search(&board, side).best_move;
        assert!(board.is_empty(mv), "{mv} is occupied on {board}");
        assert_eq!(board, before);

        for sq in board.empty_squares() {
            let mut child = board;
            child.place(sq, side);
            stack.push(child);
        }
    }

    // 5478 distinct legal positions, including the empty board.
    assert_eq!(seen.len(), 5478);
}
