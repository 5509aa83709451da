//! Pure tic-tac-toe logic with an optimal computer opponent.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Square`], [`Player`] and [`Position`]
//! - **Rules**: win and draw detection, [`evaluate_outcome`]
//! - **Search**: exhaustive [`minimax`] and best-move selection
//! - **Round**: typestate [`Game`] that alternates players from X
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, GameOutcome, Player, Position, evaluate_outcome, play_best_move};
//!
//! let mut board: Board = "XX. OO. ...".parse()?;
//! let pos = play_best_move(&mut board, Player::O)?;
//! assert_eq!(pos, Position::MiddleRight);
//! assert_eq!(evaluate_outcome(&board), GameOutcome::Won(Player::O));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod invariants;
mod position;
mod rules;
mod search;
mod types;

pub use game::{Draw, Game, GameTransition, InProgress, MoveError, Won};
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    SingleWinnerInvariant,
};
pub use position::Position;
pub use rules::{GameOutcome, LINES, check_winner, evaluate_outcome, is_draw, is_full};
pub use search::{SearchError, WIN_SCORE, best_move, evaluate, minimax, play_best_move};
pub use types::{Board, ParseBoardError, ParsePlayerError, Player, Square};
