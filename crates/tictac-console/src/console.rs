//! Line-oriented terminal I/O shared by the game and its human players.

use std::fmt;
use std::io::{BufRead, Write};

use tictac_core::Board;

use crate::error::ConsoleError;

/// Owns the input and output streams for a session.
///
/// Generic over the streams so games can be scripted in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wrap an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line without its line terminator.
    ///
    /// Returns [`ConsoleError::InputClosed`] at end of input.
    pub fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Write `text` without a newline, flush, and read the answer.
    pub fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Write one line.
    pub fn say(&mut self, line: impl fmt::Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Render the board with 1-based numbers on empty squares.
    pub fn show_board(&mut self, board: &Board) -> Result<(), ConsoleError> {
        self.say(board.pretty())
    }

    /// Give back the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
