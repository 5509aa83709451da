//! Round orchestration between two seated players.

use crate::config::GameMode;
use crate::console::Console;
use crate::players::{ComputerPlayer, HumanPlayer, Player};
use anyhow::{Context, Result};
use tictactoe_engine::{Game, GameOutcome, GameTransition, Player as Mark};
use tracing::{info, instrument};

/// Plays rounds between the players seated at X and O.
pub struct Orchestrator {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates an orchestrator from explicit seats.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self { player_x, player_o }
    }

    /// Seats humans and computers for `mode`.
    ///
    /// In human-vs-computer mode the human takes `human` and the engine the
    /// other mark.
    pub fn for_mode(mode: GameMode, human: Mark) -> Self {
        let seat = |mark: Mark| -> Box<dyn Player> {
            let is_human = match mode {
                GameMode::ComputerVsComputer => false,
                GameMode::HumanVsComputer => mark == human,
                GameMode::HumanVsHuman => true,
            };
            if is_human {
                Box::new(HumanPlayer::new(format!("Human {}", mark)))
            } else {
                Box::new(ComputerPlayer::new(format!("Computer {}", mark)))
            }
        };
        Self::new(seat(Mark::X), seat(Mark::O))
    }

    /// Name of the player seated at `mark`.
    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.player_x.name(),
            Mark::O => self.player_o.name(),
        }
    }

    /// Plays one round from an empty board and announces the result.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn play_round(&mut self, console: &mut Console) -> Result<GameOutcome> {
        info!("Starting round");
        let mut game = Game::new();

        loop {
            console.show_board(game.board())?;

            let mark = game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let position = player.get_move(&game, console)?;
            info!(player = %player.name(), %mark, position = %position, "Move made");

            match game
                .place(position)
                .with_context(|| format!("{} chose an unplayable square", player.name()))?
            {
                GameTransition::InProgress(next) => game = next,
                finished => {
                    console.show_board(finished.board())?;
                    let outcome = finished.outcome();
                    console.say(outcome)?;
                    info!(%outcome, "Round finished");
                    return Ok(outcome);
                }
            }
        }
    }
}
