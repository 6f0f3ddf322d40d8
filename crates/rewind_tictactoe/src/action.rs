//! First-class commands for the game controller.
//!
//! A command is the user's intent, raised by whatever presentation layer is
//! driving the game: clicking a cell or clicking a history entry.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A user action fed into [`Game::dispatch`](super::Game::dispatch).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Play the next mark into a cell (0-8).
    #[display("play:{_0}")]
    Play(usize),
    /// Jump to a step in the move history.
    #[display("jump:{_0}")]
    Jump(usize),
}

/// Error returned when a command token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CommandParseError {
    /// The verb before `:` is neither `play` nor `jump`.
    #[display("unknown command verb {_0:?} (expected play or jump)")]
    UnknownVerb(#[error(not(source))] String),

    /// The argument is not a non-negative integer.
    #[display("invalid number {_0:?} in command")]
    InvalidNumber(#[error(not(source))] String),
}

impl FromStr for Command {
    type Err = CommandParseError;

    /// Parses `play:<cell>`, `jump:<step>`, or a bare cell number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, arg) = s.split_once(':').unwrap_or(("play", s));
        let n = arg
            .trim()
            .parse::<usize>()
            .map_err(|_| CommandParseError::InvalidNumber(arg.to_string()))?;
        match verb.trim().to_ascii_lowercase().as_str() {
            "play" | "p" => Ok(Command::Play(n)),
            "jump" | "j" => Ok(Command::Jump(n)),
            other => Err(CommandParseError::UnknownVerb(other.to_string())),
        }
    }
}
