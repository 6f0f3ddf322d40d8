//! Interactive terminal session.

use crate::app::App;
use crate::config::TuiConfig;
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the TUI until the user quits, restoring the terminal afterwards.
#[instrument(skip_all)]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting rewind TUI");
    let app = App::new(config.highlight()?);
    let poll_interval = Duration::from_millis(*config.poll_interval_ms());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, poll_interval);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    poll_interval: Duration,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(poll_interval)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
