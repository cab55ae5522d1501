//! Tic-tac-toe for two players at one terminal.

#![warn(missing_docs)]

mod cli;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(),
        Command::Replay { moves } => run_replay(&moves),
    }
}

/// Installs the stderr subscriber so log lines never mix with the board.
fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[instrument]
fn run_play() -> Result<()> {
    info!("Starting interactive game");
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    session::run_interactive(stdin.lock(), &mut stdout)?;
    info!("Session ended");
    Ok(())
}

#[instrument]
fn run_replay(moves: &[usize]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    let session = session::replay(moves, &mut stdout)?;
    info!(status = ?session.game().status(), "Replay finished");
    Ok(())
}
