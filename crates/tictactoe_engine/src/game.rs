//! Typestate round of tic-tac-toe.
//!
//! The phase of a round is encoded in the type parameter, so a finished
//! round cannot accept another mark.

use super::invariants::{BoardInvariants, InvariantSet};
use super::rules::{GameOutcome, evaluate_outcome};
use super::search::{SearchError, best_move};
use super::{Board, Player, Position, Square};
use std::marker::PhantomData;
use tracing::instrument;

/// Typestate marker: Game is in progress.
#[derive(Debug, Clone, Copy)]
pub struct InProgress;

/// Typestate marker: Game ended in a win.
#[derive(Debug, Clone, Copy)]
pub struct Won;

/// Typestate marker: Game ended in a draw.
#[derive(Debug, Clone, Copy)]
pub struct Draw;

/// One round with typestate phase encoding.
///
/// - `Game<InProgress>` accepts marks via [`Game::place`]
/// - `Game<Won>` exposes [`Game::winner`]
/// - `Game<Draw>` only exposes the final board
#[derive(Debug, Clone)]
pub struct Game<S> {
    board: Board,
    to_move: Player,
    winner: Option<Player>,
    history: Vec<Position>,
    _state: PhantomData<S>,
}

/// Result of placing a mark - explicit state transition.
#[derive(Debug, Clone)]
pub enum GameTransition {
    /// Game continues with next player.
    InProgress(Game<InProgress>),
    /// Game ended with a winner.
    Won(Game<Won>),
    /// Game ended in a draw.
    Draw(Game<Draw>),
}

impl GameTransition {
    /// The outcome this transition represents.
    pub fn outcome(&self) -> GameOutcome {
        match self {
            GameTransition::InProgress(_) => GameOutcome::InProgress,
            GameTransition::Won(game) => GameOutcome::Won(game.winner()),
            GameTransition::Draw(_) => GameOutcome::Draw,
        }
    }

    /// Board after the transition.
    pub fn board(&self) -> &Board {
        match self {
            GameTransition::InProgress(game) => game.board(),
            GameTransition::Won(game) => game.board(),
            GameTransition::Draw(game) => game.board(),
        }
    }
}

/// Errors that can occur when placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

impl Game<InProgress> {
    /// Creates a new round with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            winner: None,
            history: Vec::new(),
            _state: PhantomData,
        }
    }

    /// Places the current player's mark, consuming the game.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::SquareOccupied` if the position is already occupied.
    #[instrument(skip(self), fields(position = %pos, player = %self.to_move))]
    pub fn place(mut self, pos: Position) -> Result<GameTransition, MoveError> {
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);
        debug_assert!(
            BoardInvariants::check_all(&self.board).is_ok(),
            "Board invariants violated after placing at {}",
            pos
        );

        Ok(match evaluate_outcome(&self.board) {
            GameOutcome::Won(winner) => GameTransition::Won(self.into_phase(Some(winner))),
            GameOutcome::Draw => GameTransition::Draw(self.into_phase(None)),
            GameOutcome::InProgress => {
                self.to_move = self.to_move.opponent();
                GameTransition::InProgress(self)
            }
        })
    }

    /// Asks the engine for the current player's best square.
    pub fn best_move(&self) -> Result<Position, SearchError> {
        best_move(&self.board, self.to_move)
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    fn into_phase<T>(self, winner: Option<Player>) -> Game<T> {
        Game {
            board: self.board,
            to_move: self.to_move,
            winner,
            history: self.history,
            _state: PhantomData,
        }
    }
}

impl Default for Game<InProgress> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Game<S> {
    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }
}

impl Game<Won> {
    /// Returns the winner of the game.
    ///
    /// Only exists on `Game<Won>`, so a winner is always present.
    pub fn winner(&self) -> Player {
        match self.winner {
            Some(player) => player,
            // Won games are only built with a winner; the last mover made the line.
            None => self.to_move,
        }
    }
}
