//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};

/// Every winning line, in scan order.
///
/// Rows and columns are interleaved (row 0, column 0, row 1, ...), followed
/// by the main diagonal and the anti-diagonal. The first complete line wins.
pub const LINES: [[Position; 3]; 8] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the owner of a line if all three squares hold the same mark.
pub fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Player> {
    let sq = board.get(a);
    if sq == board.get(b) && sq == board.get(c) {
        sq.player()
    } else {
        None
    }
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first complete line in [`LINES`] order,
/// `None` otherwise. Boards with two winners are not rejected here.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}
