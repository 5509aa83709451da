//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::console::Console;
use anyhow::Result;
use tictactoe_engine::{Game, InProgress, Position};

/// Trait for players that can make moves.
pub trait Player {
    /// Chooses a square for the player to move in `game`.
    ///
    /// The returned position is empty on the game's board.
    fn get_move(&mut self, game: &Game<InProgress>, console: &mut Console) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
