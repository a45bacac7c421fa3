//! Optimal tic-tac-toe - command-line driver
//!
//! Answers board queries and plays minimax against itself.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use optimal_tictactoe::{Board, initial_state, play_out};
use report::{BestMove, Evaluation, SelfPlay};
use serde::Serialize;
use std::fmt::Display;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Best { board, all } => run_best(board, all, cli.json),
        Command::Eval { board } => run_eval(board, cli.json),
        Command::SelfPlay { from } => run_self_play(from, cli.json),
    }
}

/// Installs the stderr subscriber; RUST_LOG wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Recommend a move for the player to act
#[instrument(skip(board), fields(board = %board.to_notation()))]
fn run_best(board: Board, all: bool, json: bool) -> Result<()> {
    let board = board.validated().context("Board cannot occur in a real game")?;
    let report = BestMove::search(&board, all);
    info!(best = ?report.best, value = report.value, "Search complete");
    emit(&report, json)
}

/// Describe a board
#[instrument(skip(board), fields(board = %board.to_notation()))]
fn run_eval(board: Board, json: bool) -> Result<()> {
    let board = board.validated().context("Board cannot occur in a real game")?;
    emit(&Evaluation::of(&board), json)
}

/// Play minimax against itself
#[instrument(skip(from))]
fn run_self_play(from: Option<Board>, json: bool) -> Result<()> {
    let start = match from {
        Some(board) => board
            .validated()
            .context("Starting board cannot occur in a real game")?,
        None => initial_state(),
    };
    debug!(start = %start.to_notation(), "Starting self-play");
    let game = SelfPlay::from(play_out(&start));
    emit(&game, json)
}

/// Prints a report as pretty JSON or as text.
fn emit<T: Serialize + Display>(report: &T, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(report).context("Failed to encode report")?;
        println!("{out}");
    } else {
        println!("{report}");
    }
    Ok(())
}
