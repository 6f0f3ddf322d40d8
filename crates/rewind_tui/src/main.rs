//! Rewind - tic-tac-toe with time travel.

use anyhow::Result;
use clap::Parser;
use rewind_tui::logging::{init_file_logging, init_stderr_logging};
use rewind_tui::{Cli, Command, TuiConfig, replay, run_tui};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let log_level = cli.log_level.as_deref();

    match cli.command.clone().unwrap_or_default() {
        Command::Play { config } => {
            let config = TuiConfig::load(config.as_deref())?;
            init_file_logging(&config, log_level)?;
            run_tui(&config)
        }
        Command::Replay { json, commands } => {
            init_stderr_logging(log_level);
            println!("{}", replay::run(&commands, json)?);
            Ok(())
        }
    }
}
