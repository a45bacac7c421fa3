//! Serializable results for each command, printed as text or JSON.

use optimal_tictactoe::{
    Board, Move, Outcome, Player, Playout, actions, minimax, optimal_moves, outcome, player,
    terminal, value,
};
use serde::Serialize;
use std::fmt;
use tracing::instrument;

/// Recommendation for the player to act.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMove {
    /// Board in row notation.
    pub board: String,
    /// Outcome of the board as given.
    pub outcome: Outcome,
    /// Player to move, absent once the game is over.
    pub player: Option<Player>,
    /// Recommended move, absent once the game is over.
    pub best: Option<Move>,
    /// Every optimal move, filled only when requested.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub optimal: Vec<Move>,
    /// Game value from X's point of view.
    pub value: i8,
}

impl BestMove {
    /// Searches `board`; with `all` set, also lists every optimal move.
    #[instrument(skip(board), fields(board = %board.to_notation()))]
    pub fn search(board: &Board, all: bool) -> Self {
        let over = terminal(board);
        Self {
            board: board.to_notation(),
            outcome: outcome(board),
            player: (!over).then(|| player(board)),
            best: minimax(board),
            optimal: if all { optimal_moves(board) } else { Vec::new() },
            value: value(board),
        }
    }
}

impl fmt::Display for BestMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.player, self.best) {
            (Some(player), Some(best)) => {
                writeln!(f, "{player} to move: play {best}")?;
                if !self.optimal.is_empty() {
                    let all = self
                        .optimal
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" ");
                    writeln!(f, "optimal moves: {all}")?;
                }
                write!(f, "value: {}", describe_value(self.value))
            }
            _ => write!(f, "game over: {}", self.outcome),
        }
    }
}

/// Summary of a single board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Board in row notation.
    pub board: String,
    /// Outcome of the board as given.
    pub outcome: Outcome,
    /// Player whose turn it is by mark count.
    pub player: Player,
    /// Number of empty squares.
    pub legal_moves: usize,
    /// Game value from X's point of view.
    pub value: i8,
}

impl Evaluation {
    /// Evaluates `board`.
    #[instrument(skip(board), fields(board = %board.to_notation()))]
    pub fn of(board: &Board) -> Self {
        Self {
            board: board.to_notation(),
            outcome: outcome(board),
            player: player(board),
            legal_moves: actions(board).len(),
            value: value(board),
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "board: {}", self.board)?;
        writeln!(f, "outcome: {}", self.outcome)?;
        if self.outcome == Outcome::InProgress {
            writeln!(f, "to move: {} ({} legal moves)", self.player, self.legal_moves)?;
        }
        write!(f, "value: {}", describe_value(self.value))
    }
}

/// A finished self-play game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfPlay {
    /// Moves in play order.
    pub moves: Vec<Move>,
    /// Every board from the start to the end, in row notation.
    pub positions: Vec<String>,
    /// Final outcome.
    pub outcome: Outcome,
    #[serde(skip)]
    grids: Vec<Board>,
}

impl From<Playout> for SelfPlay {
    fn from(game: Playout) -> Self {
        Self {
            moves: game.moves,
            positions: game.positions.iter().map(Board::to_notation).collect(),
            outcome: game.outcome,
            grids: game.positions,
        }
    }
}

impl fmt::Display for SelfPlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut boards = self.grids.iter();
        if let Some(start) = boards.next() {
            writeln!(f, "{start}\n")?;
        }
        for (mv, board) in self.moves.iter().zip(boards) {
            writeln!(f, "{mv}:\n{board}\n")?;
        }
        write!(f, "result: {}", self.outcome)
    }
}

fn describe_value(value: i8) -> &'static str {
    match value {
        1 => "X wins with best play",
        -1 => "O wins with best play",
        _ => "draw with best play",
    }
}
