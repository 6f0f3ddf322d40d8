//! Terminal front-end for rewind tic-tac-toe.
//!
//! The interactive TUI and the headless replay both drive the same
//! [`rewind_tictactoe::Game`] controller.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod terminal;
pub mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
pub use terminal::run_tui;
