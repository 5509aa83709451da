//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The outcome of a board is derived on
//! demand and never stored.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};

use super::{Board, Player};
use serde::{Deserialize, Serialize};

/// Terminal status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Empty squares remain and nobody has won.
    InProgress,
    /// A player owns a complete line.
    Won(Player),
    /// Board is full with no winner.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Won(player) => Some(*player),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    /// True for wins and draws.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Won(player) => write!(f, "Player {} wins!", player),
            GameOutcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Computes the outcome of a board.
///
/// A winner takes precedence over fullness, so a board completed by a
/// winning move is `Won`, not `Draw`.
pub fn evaluate_outcome(board: &Board) -> GameOutcome {
    if let Some(winner) = check_winner(board) {
        GameOutcome::Won(winner)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
