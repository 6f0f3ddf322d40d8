//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a move history you can jump through
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter directive, overrides RUST_LOG and the config file
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply commands headlessly and print the resulting game
    Replay {
        /// Print the game view as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Commands such as `play:4`, `jump:0` or a bare cell number
        commands: Vec<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { config: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["rewind"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
    }

    #[test]
    fn test_replay_args() {
        let cli =
            Cli::try_parse_from(["rewind", "replay", "--json", "play:0", "jump:0", "4"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                json: true,
                commands: vec!["play:0".into(), "jump:0".into(), "4".into()],
            })
        );
    }

    #[test]
    fn test_global_log_level() {
        let cli = Cli::try_parse_from(["rewind", "play", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
