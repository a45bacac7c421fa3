//! Command-line interface for optimal_tictactoe.

use clap::{Parser, Subcommand};
use optimal_tictactoe::Board;

/// Optimal tic-tac-toe - exhaustive minimax queries
#[derive(Parser, Debug)]
#[command(name = "optimal_tictactoe")]
#[command(about = "Find optimal tic-tac-toe moves by exhaustive minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log search decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
///
/// Boards are nine cells in row-major order: `X`, `O`, and `.` for empty,
/// with optional `/` between rows, e.g. `XX./.O./...`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend a move for the player to act
    Best {
        /// Board to search
        #[arg(allow_hyphen_values = true)]
        board: Board,

        /// List every optimal move instead of the first
        #[arg(long)]
        all: bool,
    },

    /// Describe a board: outcome, player to move and game value
    Eval {
        /// Board to evaluate
        #[arg(allow_hyphen_values = true)]
        board: Board,
    },

    /// Play minimax against itself until the game ends
    SelfPlay {
        /// Starting board (defaults to the empty board)
        #[arg(long, allow_hyphen_values = true)]
        from: Option<Board>,
    },
}
