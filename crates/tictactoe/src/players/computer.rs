//! Computer player backed by the minimax engine.

use super::Player;
use crate::console::Console;
use anyhow::Result;
use tictactoe_engine::{Game, InProgress, Position};
use tracing::{debug, instrument};

/// Plays the engine's best move.
#[derive(Debug)]
pub struct ComputerPlayer {
    name: String,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(player = %self.name, mark = %game.to_move()))]
    fn get_move(&mut self, game: &Game<InProgress>, console: &mut Console) -> Result<Position> {
        console.say(format!("Computer {}'s turn...", game.to_move()))?;
        let position = game.best_move()?;
        debug!(position = %position, "Computer chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
