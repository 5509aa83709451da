//! Command-line interface for tictactoe.

use crate::config::{GameMode, PlayConfig};
use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::Player as Mark;

/// Tic-tac-toe against an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Console tic-tac-toe with an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game mode; the menu is shown when omitted
    #[arg(short, long, value_enum)]
    pub mode: Option<GameMode>,

    /// Mark the human plays in human-vs-computer mode (X or O)
    #[arg(long)]
    pub human: Option<Mark>,

    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Play a single round without asking to play again
    #[arg(long)]
    pub once: bool,
}

impl Cli {
    /// Applies command-line flags on top of a loaded configuration.
    pub fn apply(&self, mut config: PlayConfig) -> PlayConfig {
        if let Some(mode) = self.mode {
            config = config.with_mode(mode);
        }
        if let Some(human) = self.human {
            config = config.with_human(human);
        }
        if self.once {
            config = config.with_replay(false);
        }
        config
    }
}
