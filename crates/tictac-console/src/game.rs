//! Turn orchestration and the replay loop.

use std::io::{BufRead, Write};

use tictac_core::{Board, Outcome, Player, Square, is_winner};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::console::Console;
use crate::error::ConsoleError;
use crate::input::parse_replay;
use crate::player::MoveSource;

/// Question asked after each game.
pub const REPLAY_PROMPT: &str = "Continue Playing? [Y/N]: ";

/// Play one game from an empty board.
///
/// Each turn shows the board, asks the side to move for a square, places
/// it, and checks whether the mover has a line or the board is full. X
/// moves first. The final board and result are shown at the end.
pub fn play_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    sources: &[MoveSource; Player::COUNT],
) -> Result<Outcome, ConsoleError> {
    let mut board = Board::new();
    let mut result = Outcome::InProgress;

    for turn in 0..Square::COUNT {
        console.show_board(&board)?;

        let player = Player::for_turn(turn);
        let sq = sources[player.index()].next_move(player, &board, console)?;
        board.place(sq, player);
        debug!(%player, square = %sq, board = %board, "move played");

        if is_winner(&board, player) {
            result = Outcome::Won(player);
            break;
        }
        if board.is_full() {
            result = Outcome::Draw;
            break;
        }
    }

    console.show_board(&board)?;
    match result.winner() {
        Some(player) => console.say(format_args!("Player {player} won!"))?,
        None => console.say("Draw!")?,
    }
    info!(%result, board = %board, "game over");
    Ok(result)
}

/// Ask whether to play again until the answer starts with y or n.
pub fn ask_replay<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<bool, ConsoleError> {
    loop {
        if let Some(answer) = parse_replay(&console.prompt(REPLAY_PROMPT)?) {
            return Ok(answer);
        }
    }
}

/// Results across a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games won by each player, indexed by [`Player::index`].
    pub wins: [u32; Player::COUNT],
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Record a finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(player) => self.wins[player.index()] += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.wins.iter().sum::<u32>() + self.draws
    }
}

/// A run of games with the same players, ending when the user declines a
/// replay or input runs out.
pub struct Session<R, W> {
    console: Console<R, W>,
    sources: [MoveSource; Player::COUNT],
    tally: Tally,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session on `console` using the players from `config`.
    pub fn new(console: Console<R, W>, config: &GameConfig) -> Self {
        Self {
            console,
            sources: config.move_sources(),
            tally: Tally::default(),
        }
    }

    /// Play games until the user stops or input closes.
    ///
    /// A closed input stream ends the session normally; I/O failures are
    /// returned.
    pub fn run(&mut self) -> Result<Tally, ConsoleError> {
        loop {
            match self.round() {
                Ok(true) => {}
                Ok(false) => break,
                Err(ConsoleError::InputClosed) => {
                    info!("input closed, ending session");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            games = self.tally.games(),
            x_wins = self.tally.wins[Player::X.index()],
            o_wins = self.tally.wins[Player::O.index()],
            draws = self.tally.draws,
            "session finished"
        );
        Ok(self.tally)
    }

    /// Results so far.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Give back the console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn round(&mut self) -> Result<bool, ConsoleError> {
        let outcome = play_game(&mut self.console, &self.sources)?;
        self.tally.record(outcome);
        ask_replay(&mut self.console)
    }
}
