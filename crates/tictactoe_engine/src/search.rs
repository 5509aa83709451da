//! Exhaustive minimax search over the 3x3 state space.
//!
//! Scores are absolute: positive favours X, negative favours O. There is no
//! depth term and no pruning; every line beneath the given board is explored
//! down to a win or a full board.
//!
//! The search explores a single board in place. Each candidate mark is placed,
//! searched, then cleared before the next sibling is tried, so a search never
//! leaves a trace on the board it was given.

use super::rules::check_winner;
use super::{Board, Player, Position, Square};
use tracing::{debug, instrument};

/// Score of a board won by X. A board won by O scores the negation.
pub const WIN_SCORE: i32 = 10;

/// Reasons the engine cannot produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// No empty square remains.
    #[display("No legal move: the board is full")]
    BoardFull,

    /// The board already has a winner.
    #[display("No legal move: player {} has already won", _0)]
    AlreadyWon(Player),
}

impl std::error::Error for SearchError {}

/// Scores a board from X's perspective: +10 if X has won, -10 if O has won,
/// 0 otherwise.
pub fn evaluate(board: &Board) -> i32 {
    match check_winner(board) {
        Some(Player::X) => WIN_SCORE,
        Some(Player::O) => -WIN_SCORE,
        None => 0,
    }
}

/// Minimax value of `board` with X to move when `maximizing`, O otherwise.
///
/// The board is used as scratch space and is returned unchanged.
pub fn minimax(board: &mut Board, maximizing: bool) -> i32 {
    Search::default().minimax(board, maximizing)
}

/// Chooses the best square for `mover` without touching `board`.
///
/// X takes the highest score, O the lowest. Ties go to the first square in
/// row-major order, except that a square that wins on the spot is taken
/// before any later square is considered.
///
/// # Errors
///
/// Returns [`SearchError::AlreadyWon`] if the board already has a winner and
/// [`SearchError::BoardFull`] if there is no empty square.
#[instrument(level = "debug", skip(board), fields(mover = %mover))]
pub fn best_move(board: &Board, mover: Player) -> Result<Position, SearchError> {
    if let Some(winner) = check_winner(board) {
        return Err(SearchError::AlreadyWon(winner));
    }

    let mut scratch = *board;
    let mut search = Search::default();
    let mut best: Option<(Position, i32)> = None;

    for pos in board.empty_positions() {
        scratch.set(pos, Square::Occupied(mover));
        let wins_now = check_winner(&scratch) == Some(mover);
        // The reply belongs to the opponent: X maximizes, so after an O
        // placement the search maximizes.
        let score = search.minimax(&mut scratch, mover == Player::O);
        scratch.clear(pos);

        if wins_now {
            best = Some((pos, score));
            break;
        }
        if best.is_none_or(|(_, incumbent)| improves(mover, score, incumbent)) {
            best = Some((pos, score));
        }
    }

    let (pos, score) = best.ok_or(SearchError::BoardFull)?;
    debug!(position = %pos, score, nodes = search.nodes, "Selected move");
    Ok(pos)
}

/// Plays the best square for `mover` on `board`.
///
/// Exactly one empty square becomes `mover`'s on success; on error the board
/// is untouched.
#[instrument(level = "debug", skip(board), fields(mover = %mover))]
pub fn play_best_move(board: &mut Board, mover: Player) -> Result<Position, SearchError> {
    let pos = best_move(board, mover)?;
    board.set(pos, Square::Occupied(mover));
    Ok(pos)
}

/// Strict improvement for the mover; equal scores keep the incumbent.
fn improves(mover: Player, candidate: i32, incumbent: i32) -> bool {
    match mover {
        Player::X => candidate > incumbent,
        Player::O => candidate < incumbent,
    }
}

/// Recursive searcher. Counts visited nodes for logging.
#[derive(Debug, Default)]
struct Search {
    nodes: u64,
}

impl Search {
    fn minimax(&mut self, board: &mut Board, maximizing: bool) -> i32 {
        self.nodes += 1;

        if check_winner(board).is_some() {
            return evaluate(board);
        }
        if board.is_full() {
            return 0;
        }

        let mark = Square::Occupied(if maximizing { Player::X } else { Player::O });
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, mark);
            let score = self.minimax(board, !maximizing);
            board.clear(pos);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}
