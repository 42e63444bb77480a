//! Draw detection.

use super::super::types::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the game is a draw: board full with no winner.
///
/// Win takes priority over draw on the final move, so callers evaluate
/// [`check_winner`] first; this function encodes the same ordering.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
