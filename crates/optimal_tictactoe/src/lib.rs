//! Optimal tic-tac-toe: pure game rules and exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`] is a `Copy` value; the rule functions
//!   ([`player`], [`actions`], [`result`], [`winner`], [`terminal`],
//!   [`utility`]) never mutate their input.
//! - **Search**: [`minimax`] returns the best move for the player to act,
//!   found by full-depth backward induction.
//!
//! # Example
//!
//! ```
//! use optimal_tictactoe::{initial_state, minimax, result, terminal};
//!
//! let mut board = initial_state();
//! while let Some(mv) = minimax(&board) {
//!     board = result(&board, mv)?;
//! }
//! assert!(terminal(&board));
//! # Ok::<(), optimal_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod kani_support;
mod types;

// Public module declarations
pub mod invariants;
pub mod rules;
pub mod search;

// Crate-level exports - Domain types
pub use action::{Move, MoveError};
pub use types::{Board, BoardError, Outcome, Player, Square};

// Crate-level exports - Rules
pub use rules::{actions, initial_state, outcome, player, result, terminal, utility, winner};

// Crate-level exports - Search
pub use search::{Playout, minimax, optimal_moves, play_out, value};

/// Alias for clarity: the mark a player leaves on a square.
pub type Mark = Player;
