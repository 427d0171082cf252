//! Console errors.

/// Reasons a typed move is rejected. The player is asked again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// Nothing was typed.
    #[error("no position entered")]
    Empty,

    /// The entry is not a whole number.
    #[error("not a number: {input}")]
    NotANumber {
        /// The text that failed to parse.
        input: String,
    },

    /// The number is outside 1..=9.
    #[error("position {position} is off the board")]
    OutOfRange {
        /// The number entered.
        position: usize,
    },

    /// The square already holds a mark.
    #[error("position {position} is already taken")]
    Occupied {
        /// The number entered.
        position: usize,
    },
}

/// Errors that end a game or a session.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// The input stream reached end of file.
    #[error("input closed")]
    InputClosed,

    /// A controller name on the command line is not recognized.
    #[error("unknown controller \"{found}\", expected human or computer")]
    UnknownController {
        /// The unrecognized name.
        found: String,
    },

    /// An I/O error occurred while reading or writing the console.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
