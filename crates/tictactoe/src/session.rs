//! Session loop: mode selection, rounds and the replay prompt.

use crate::config::PlayConfig;
use crate::console::Console;
use crate::orchestrator::Orchestrator;
use anyhow::Result;
use tictactoe_engine::GameOutcome;
use tracing::{info, instrument};

/// Runs rounds until the player declines a replay.
///
/// Returns the outcome of every round played, in order.
#[instrument(skip_all)]
pub fn run_session(config: &PlayConfig, console: &mut Console) -> Result<Vec<GameOutcome>> {
    console.say("TIC-TAC-TOE")?;
    let mut outcomes = Vec::new();

    loop {
        let mode = match config.mode() {
            Some(mode) => *mode,
            None => console.select_mode()?,
        };
        info!(%mode, round = outcomes.len() + 1, "Round configured");

        let mut orchestrator = Orchestrator::for_mode(mode, *config.human());
        outcomes.push(orchestrator.play_round(console)?);

        if !*config.replay() || !console.ask_play_again()? {
            break;
        }
    }

    console.say("GAME OVER.")?;
    info!(rounds = outcomes.len(), "Session finished");
    Ok(outcomes)
}
