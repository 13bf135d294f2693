//! Terminal tic-tac-toe.

#![warn(missing_docs)]

mod app;
mod cli;
mod input;
mod replay;
mod ui;
mod view;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(&cli.log_file)?;

    let settings = cli.settings()?;
    info!(?settings, "Settings resolved");

    match cli.command {
        None | Some(Command::Play) => app::run(settings).await,
        Some(Command::Replay {
            moves,
            json,
            flush_timers,
        }) => run_replay(&settings, &moves, json, flush_timers),
    }
}

/// Run a scripted game and print the result
#[instrument(skip(settings))]
fn run_replay(
    settings: &tictactoe_store::GameSettings,
    moves: &str,
    json: bool,
    flush_timers: bool,
) -> Result<()> {
    let steps = cli::parse_moves(moves)?;
    let state = replay::replay(settings, &steps, flush_timers);

    if json {
        println!("{}", replay::render_json(&state)?);
    } else {
        print!("{}", replay::render_text(&state));
    }
    Ok(())
}

/// Logs go to a file so they never draw over the terminal UI.
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe_store=debug")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
