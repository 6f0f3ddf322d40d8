//! Headless replay: apply a list of commands and print the result.

use anyhow::Result;
use rewind_tictactoe::{Command, CommandParseError, Game, GameView};
use tracing::{info, instrument};

/// Parses every token into a command, failing on the first bad one.
pub fn parse_commands<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Command>, CommandParseError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// Applies commands to a fresh game, in order.
#[instrument(skip(commands), fields(count = commands.len()))]
pub fn replay(commands: &[Command]) -> Game {
    let mut game = Game::new();
    let mut applied = 0;
    for &cmd in commands {
        if game.dispatch(cmd) {
            applied += 1;
        }
    }
    info!(applied, ignored = commands.len() - applied, "Replay finished");
    game
}

/// Plain-text rendering of a game view.
pub fn render_text(view: &GameView) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .map(|col| {
                    let i = row * 3 + col;
                    let mark = view.cells[i].map_or(" ".to_string(), |p| p.to_string());
                    if view.winning_squares.contains(&i) {
                        format!("[{mark}]")
                    } else {
                        format!(" {mark} ")
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    let mut out = format!("{}\n\n{}\n\n", view.status_text, rows.join("\n---+---+---\n"));
    for item in &view.moves {
        let marker = if item.active { '*' } else { ' ' };
        out.push_str(&format!("{marker} {}. {}\n", item.step + 1, item.label));
    }
    out
}

/// Runs a replay from raw tokens and formats the result.
pub fn run<S: AsRef<str>>(tokens: &[S], json: bool) -> Result<String> {
    let commands = parse_commands(tokens)?;
    let view = replay(&commands).view();
    if json {
        Ok(serde_json::to_string_pretty(&view)?)
    } else {
        Ok(render_text(&view))
    }
}
