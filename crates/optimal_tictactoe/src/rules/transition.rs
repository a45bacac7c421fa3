//! Turn order, legal moves and successor boards.

use crate::invariants::{BoardInvariants, InvariantSet};
use crate::{Board, Move, MoveError, Player, Square};
use std::collections::BTreeSet;
use tracing::{instrument, warn};

/// Returns the starting board: all nine squares empty.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who moves next on `board`.
///
/// X moves when an even number of squares is occupied, O when odd. The
/// answer is defined for terminal boards too, even though nobody moves
/// there.
pub fn player(board: &Board) -> Player {
    if board.occupied() % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every empty coordinate on `board`.
///
/// The set iterates by row, then column.
pub fn actions(board: &Board) -> BTreeSet<Move> {
    board
        .squares()
        .iter()
        .enumerate()
        .filter(|(_, sq)| **sq == Square::Empty)
        .filter_map(|(i, _)| Move::from_index(i))
        .collect()
}

/// Returns the board that results from the player to move marking `mv`.
///
/// `board` itself is never modified.
///
/// # Errors
///
/// Returns [`MoveError::OutOfRange`] if either coordinate exceeds 2 and
/// [`MoveError::SquareOccupied`] if the square already holds a mark.
#[instrument(level = "trace", skip(board), fields(board = %board.to_notation()))]
pub fn result(board: &Board, mv: Move) -> Result<Board, MoveError> {
    let Some(index) = mv.index() else {
        warn!(%mv, "Rejected out-of-range move");
        return Err(MoveError::OutOfRange(mv));
    };

    if board.squares()[index] != Square::Empty {
        warn!(%mv, "Rejected move onto occupied square");
        return Err(MoveError::SquareOccupied(mv));
    }

    let next = board.with(index, Square::Occupied(player(board)));
    debug_assert!(
        BoardInvariants::check_all(board).is_err() || BoardInvariants::check_all(&next).is_ok(),
        "result broke board invariants"
    );
    Ok(next)
}
