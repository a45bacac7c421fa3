//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the game ended in a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
