//! Console front end for tictac: move sources, turn orchestration, and the replay loop.

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod input;
pub mod player;

pub use config::{Controller, GameConfig};
pub use console::Console;
pub use error::{ConsoleError, InputError};
pub use game::{Session, Tally, play_game};
pub use player::MoveSource;
