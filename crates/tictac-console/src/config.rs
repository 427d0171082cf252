//! Session configuration: who controls each side and how the computer breaks ties.

use std::fmt;
use std::str::FromStr;

use tictac_core::Player;
use tictac_engine::{MoveOrder, Searcher};

use crate::error::ConsoleError;
use crate::player::MoveSource;

/// Who plays a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Computer,
}

impl FromStr for Controller {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Controller, ConsoleError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Controller::Human),
            "computer" | "cpu" => Ok(Controller::Computer),
            other => Err(ConsoleError::UnknownController {
                found: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Controller::Human => write!(f, "human"),
            Controller::Computer => write!(f, "computer"),
        }
    }
}

/// Settings for every game in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Controller for X, who moves first.
    pub x: Controller,
    /// Controller for O.
    pub o: Controller,
    /// Candidate order for computer players.
    pub order: MoveOrder,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            x: Controller::Human,
            o: Controller::Computer,
            order: MoveOrder::CenterFirst,
        }
    }
}

impl GameConfig {
    /// Return the controller for `player`.
    pub fn controller(&self, player: Player) -> Controller {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Build the move sources, indexed by [`Player::index`].
    pub fn move_sources(&self) -> [MoveSource; Player::COUNT] {
        Player::ALL.map(|player| match self.controller(player) {
            Controller::Human => MoveSource::Human,
            Controller::Computer => MoveSource::Computer(Searcher::new(self.order)),
        })
    }
}
