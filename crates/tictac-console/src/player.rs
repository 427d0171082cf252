//! Move sources: where each side's next square comes from.

use std::fmt;
use std::io::{BufRead, Write};

use tictac_core::{Board, Player, Square};
use tictac_engine::Searcher;
use tracing::debug;

use crate::console::Console;
use crate::error::ConsoleError;
use crate::input::parse_move;

/// Reply printed when a typed move is rejected.
pub const RETRY_MESSAGE: &str = "Enter Again!";

/// Supplies moves for one side of a game.
#[derive(Debug, Clone, Copy)]
pub enum MoveSource {
    /// A person typing 1-based positions.
    Human,
    /// The perfect-play searcher.
    Computer(Searcher),
}

impl MoveSource {
    /// Ask this source for `player`'s next move on `board`.
    ///
    /// The returned square is always empty. A human is prompted until a
    /// valid position is entered; the computer announces its choice.
    pub fn next_move<R: BufRead, W: Write>(
        &self,
        player: Player,
        board: &Board,
        console: &mut Console<R, W>,
    ) -> Result<Square, ConsoleError> {
        match self {
            MoveSource::Human => human_move(player, board, console),
            MoveSource::Computer(searcher) => {
                let result = searcher.search(board, player);
                console.say(format_args!("{player}: {}", result.best_move))?;
                Ok(result.best_move)
            }
        }
    }

    /// Return `true` for a human-controlled side.
    pub fn is_human(&self) -> bool {
        matches!(self, MoveSource::Human)
    }
}

fn human_move<R: BufRead, W: Write>(
    player: Player,
    board: &Board,
    console: &mut Console<R, W>,
) -> Result<Square, ConsoleError> {
    loop {
        let line = console.prompt(&format!("{player}: "))?;
        match parse_move(&line, board) {
            Ok(sq) => return Ok(sq),
            Err(e) => {
                debug!(%player, error = %e, "rejected move entry");
                console.say(RETRY_MESSAGE)?;
            }
        }
    }
}

impl fmt::Display for MoveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveSource::Human => write!(f, "human"),
            MoveSource::Computer(_) => write!(f, "computer"),
        }
    }
}
