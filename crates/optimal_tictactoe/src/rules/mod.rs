//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so that search and validation compose over them.

pub mod draw;
pub mod transition;
pub mod win;

pub use draw::{is_draw, is_full};
pub use transition::{actions, initial_state, player, result};
pub use win::{LINES, winner};

use crate::{Board, Outcome, Player};

/// Returns `true` when the game is over: a player has a line, or the
/// board is full.
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Value of the board from X's point of view.
///
/// `1` if X has won, `-1` if O has won, `0` otherwise. Only meaningful on
/// terminal boards; non-terminal boards also report `0`.
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Outcome of the board.
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::Winner(player),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
