//! Kani proof harnesses for the board rules.
//!
//! Boards are bounded to nine squares, so these harnesses cover every
//! board the arbitrary generator can produce.

use super::{BoardInvariants, InvariantSet};
use crate::{Board, Move, player, result};

/// A legal move flips the player to move.
#[kani::proof]
fn verify_result_alternates_player() {
    let board: Board = kani::any();
    let mv: Move = kani::any();
    kani::assume(BoardInvariants::check_all(&board).is_ok());
    if let Ok(next) = result(&board, mv) {
        assert_eq!(player(&next), player(&board).opponent());
    }
}

/// `result` changes only the targeted square and never touches its input.
#[kani::proof]
fn verify_result_changes_one_square() {
    let board: Board = kani::any();
    let before = board;
    let mv: Move = kani::any();
    if let Ok(next) = result(&board, mv) {
        assert_eq!(board, before);
        for i in 0..9 {
            if Some(i) != mv.index() {
                assert_eq!(next.squares()[i], board.squares()[i]);
            }
        }
    }
}
