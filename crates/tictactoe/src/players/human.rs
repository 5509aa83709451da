//! Human player that types coordinates at the console.

use super::Player;
use crate::console::{Console, parse_move};
use anyhow::{Result, bail};
use tictactoe_engine::{Game, InProgress, Position};
use tracing::{debug, instrument};

/// Human player using console input.
#[derive(Debug)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    #[instrument(skip_all, fields(player = %self.name, mark = %game.to_move()))]
    fn get_move(&mut self, game: &Game<InProgress>, console: &mut Console) -> Result<Position> {
        loop {
            console.prompt(format!(
                "Player {}, enter row and column (0-2): ",
                game.to_move()
            ))?;

            let Some(line) = console.read_line()? else {
                bail!("Input closed while waiting for {}'s move", self.name);
            };

            match parse_move(&line, game.board()) {
                Ok(position) => return Ok(position),
                Err(e) => {
                    debug!(error = %e, "Rejected input");
                    console.say("Invalid move. Try again.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
