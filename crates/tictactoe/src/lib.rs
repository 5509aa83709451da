//! Console tic-tac-toe against an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Config**: TOML settings plus command-line overrides
//! - **Console**: board rendering, menus and coordinate entry
//! - **Players**: human (console) and computer (engine) seats
//! - **Orchestrator**: one round between two seats
//! - **Session**: mode selection and replay loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod orchestrator;
mod players;
mod session;

pub use cli::Cli;
pub use config::{ConfigError, GameMode, PlayConfig};
pub use console::{Console, InputError, parse_move};
pub use orchestrator::Orchestrator;
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use session::run_session;
