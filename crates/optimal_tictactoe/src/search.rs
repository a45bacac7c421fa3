//! Exhaustive minimax search.
//!
//! Values are always from X's point of view: X maximizes, O minimizes.
//! Every reachable position below the searched board is visited once per
//! path; the 3x3 tree is small enough that no pruning or caching is used.

use crate::rules::{actions, outcome, player, result, terminal, utility};
use crate::{Board, Move, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Successor of a move drawn from `actions(board)`.
///
/// # Panics
///
/// Panics if the rules reject a move they just listed as legal.
fn successor(board: &Board, mv: Move) -> Board {
    match result(board, mv) {
        Ok(next) => next,
        Err(e) => panic!("legal move generation produced a rejected move: {e}"),
    }
}

/// Best value X can force from `board`, assuming O answers perfectly.
#[instrument(level = "trace", skip_all)]
pub fn max_value(board: &Board) -> i8 {
    if terminal(board) {
        return utility(board);
    }
    actions(board)
        .into_iter()
        .fold(i8::MIN, |v, mv| v.max(min_value(&successor(board, mv))))
}

/// Best value O can force from `board`, assuming X answers perfectly.
#[instrument(level = "trace", skip_all)]
pub fn min_value(board: &Board) -> i8 {
    if terminal(board) {
        return utility(board);
    }
    actions(board)
        .into_iter()
        .fold(i8::MAX, |v, mv| v.min(max_value(&successor(board, mv))))
}

/// Game-theoretic value of `board` under optimal play by both sides.
///
/// `1` means X wins, `-1` means O wins, `0` a draw. Terminal boards
/// report their utility.
pub fn value(board: &Board) -> i8 {
    match player(board) {
        Player::X => max_value(board),
        Player::O => min_value(board),
    }
}

/// Every legal move paired with the value of the position it leads to.
fn scored_moves(board: &Board) -> Vec<(Move, i8)> {
    if terminal(board) {
        return Vec::new();
    }
    let mover = player(board);
    actions(board)
        .into_iter()
        .map(|mv| {
            let next = successor(board, mv);
            let reply = if mover.is_maximizing() {
                min_value(&next)
            } else {
                max_value(&next)
            };
            (mv, reply)
        })
        .collect()
}

fn is_better(mover: Player, candidate: i8, best: i8) -> bool {
    if mover.is_maximizing() {
        candidate > best
    } else {
        candidate < best
    }
}

/// Returns the optimal move for the player to move, or `None` when the
/// game is already over.
///
/// Among equally good moves the first by row, then column, is chosen.
#[instrument(skip(board), fields(board = %board.to_notation()))]
pub fn minimax(board: &Board) -> Option<Move> {
    let mover = player(board);
    let (best, best_value) = scored_moves(board)
        .into_iter()
        .reduce(|best, candidate| {
            if is_better(mover, candidate.1, best.1) {
                candidate
            } else {
                best
            }
        })?;
    debug!(%mover, mv = %best, value = best_value, "Selected move");
    Some(best)
}

/// Every move that achieves the optimal value, by row then column.
///
/// Empty for terminal boards. The first entry is what [`minimax`] returns.
#[instrument(skip(board), fields(board = %board.to_notation()))]
pub fn optimal_moves(board: &Board) -> Vec<Move> {
    let mover = player(board);
    let scored = scored_moves(board);
    let Some(target) = scored
        .iter()
        .map(|(_, v)| *v)
        .reduce(|a, b| if is_better(mover, b, a) { b } else { a })
    else {
        return Vec::new();
    };
    scored
        .into_iter()
        .filter(|(_, v)| *v == target)
        .map(|(mv, _)| mv)
        .collect()
}

/// A game played to the end with [`minimax`] choosing for both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playout {
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
    /// Starting board followed by the board after each move.
    pub positions: Vec<Board>,
    /// Outcome of the final board.
    pub outcome: Outcome,
}

impl Playout {
    /// The board the game ended on, or `None` for an empty record.
    pub fn last(&self) -> Option<&Board> {
        self.positions.last()
    }
}

/// Plays `board` out to a terminal position with optimal moves for both
/// players.
#[instrument(skip(board), fields(board = %board.to_notation()))]
pub fn play_out(board: &Board) -> Playout {
    let mut moves = Vec::new();
    let mut positions = vec![*board];
    let mut current = *board;
    while let Some(mv) = minimax(&current) {
        current = successor(&current, mv);
        moves.push(mv);
        positions.push(current);
    }
    let outcome = outcome(&current);
    debug!(plies = moves.len(), %outcome, "Playout finished");
    Playout {
        moves,
        positions,
        outcome,
    }
}
