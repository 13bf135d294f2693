//! Command-line interface for tictactoe_tui.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_store::{Cell, ConfigError, GameSettings};
use tracing::instrument;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, default_value = "tictactoe.toml", global = true)]
    pub config: PathBuf,

    /// Where to write logs
    #[arg(long, default_value = "tictactoe_tui.log", global = true)]
    pub log_file: PathBuf,

    /// Override how long error messages stay up, in milliseconds
    #[arg(long, global = true)]
    pub clear_delay_ms: Option<u64>,

    /// Ignore moves once a winner has been declared
    #[arg(long, global = true)]
    pub lock_after_win: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Run a sequence of moves headlessly and print the final state
    Replay {
        /// Moves separated by spaces: `x,y` coordinates, keypad numbers 1-9, or `reset`
        #[arg(short, long)]
        moves: String,

        /// Print the state as JSON
        #[arg(long)]
        json: bool,

        /// Fire pending error clears before printing
        #[arg(long)]
        flush_timers: bool,
    },
}

impl Cli {
    /// Settings from the config file with command-line overrides applied.
    #[instrument(skip(self), fields(config = %self.config.display()))]
    pub fn settings(&self) -> Result<GameSettings, ConfigError> {
        let mut settings = GameSettings::load_or_default(&self.config)?;
        if let Some(ms) = self.clear_delay_ms {
            settings = settings.with_error_clear_delay_ms(ms);
        }
        if self.lock_after_win {
            settings = settings.with_lock_after_win(true);
        }
        Ok(settings)
    }
}

/// One step of a scripted replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStep {
    /// Click a cell.
    Move(Cell),
    /// Reset the game.
    Reset,
}

/// Parses a space-separated replay script.
#[instrument]
pub fn parse_moves(script: &str) -> anyhow::Result<Vec<ReplayStep>> {
    script
        .split_whitespace()
        .map(|token| {
            if token.eq_ignore_ascii_case("reset") {
                Ok(ReplayStep::Reset)
            } else {
                token
                    .parse::<Cell>()
                    .map(ReplayStep::Move)
                    .map_err(|e| anyhow::anyhow!("bad move {:?}: {}", token, e.message))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_play() {
        let cli = Cli::parse_from(["tictactoe_tui"]);
        assert!(cli.command.is_none());
        assert!(!cli.lock_after_win);
    }

    #[test]
    fn overrides_apply_over_defaults() {
        let cli = Cli::parse_from([
            "tictactoe_tui",
            "--config",
            "/nonexistent/tictactoe.toml",
            "--clear-delay-ms",
            "750",
            "--lock-after-win",
        ]);
        let settings = cli.settings().unwrap();
        assert_eq!(*settings.error_clear_delay_ms(), 750);
        assert!(*settings.lock_after_win());
    }

    #[test]
    fn replay_subcommand() {
        let cli = Cli::parse_from(["tictactoe_tui", "replay", "--moves", "0,0 5", "--json"]);
        match cli.command {
            Some(Command::Replay {
                moves,
                json,
                flush_timers,
            }) => {
                assert_eq!(moves, "0,0 5");
                assert!(json);
                assert!(!flush_timers);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parses_script() {
        let steps = parse_moves("0,0  5 reset 2,2").unwrap();
        assert_eq!(
            steps,
            vec![
                ReplayStep::Move(Cell::new(0, 0).unwrap()),
                ReplayStep::Move(Cell::new(1, 1).unwrap()),
                ReplayStep::Reset,
                ReplayStep::Move(Cell::new(2, 2).unwrap()),
            ]
        );
        assert!(parse_moves("0,0 3,3").is_err());
    }
}
