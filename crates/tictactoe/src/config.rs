//! Play configuration loaded from TOML and overridden by the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Player as Mark;
use tracing::{debug, info, instrument};

/// Who sits at each side of the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// The engine plays both sides.
    #[strum(to_string = "Computer vs Computer")]
    ComputerVsComputer,
    /// One human against the engine.
    #[strum(to_string = "Human vs Computer")]
    HumanVsComputer,
    /// Two humans sharing the console.
    #[strum(to_string = "Human vs Human")]
    HumanVsHuman,
}

impl GameMode {
    /// Maps a menu choice (0-2) to a mode, in declaration order.
    pub fn from_choice(choice: usize) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter().nth(choice)
    }
}

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct PlayConfig {
    /// Mode to play; the menu is shown when unset.
    #[setters(strip_option)]
    mode: Option<GameMode>,

    /// Mark the human takes in human-vs-computer mode.
    human: Mark,

    /// Whether to offer another round after each game.
    replay: bool,

    /// Tracing filter used when `RUST_LOG` is not set.
    log_filter: String,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            mode: None,
            human: Mark::X,
            replay: true,
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = ?config.mode, human = %config.human, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
