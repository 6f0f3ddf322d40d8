//! Application state and key handling.

use crate::input::{move_cursor, move_selection};
use crossterm::event::KeyCode;
use ratatui::style::Color;
use rewind_tictactoe::{Command, Game, Position};
use tracing::{debug, info, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board cursor.
    #[default]
    Board,
    /// The move-history list.
    History,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    selected: usize,
    highlight: Color,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(highlight: Color) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            highlight,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected history row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Winning-line color.
    pub fn highlight(&self) -> Color {
        self.highlight
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    let index = digit as usize - 1;
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                    self.send(Command::Play(index));
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let command = match self.focus {
                    Focus::Board => Command::Play(self.cursor.to_index()),
                    Focus::History => Command::Jump(self.selected),
                };
                self.send(command);
            }
            code => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, code),
                Focus::History => {
                    self.selected = move_selection(self.selected, self.game.history().len(), code)
                }
            },
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.selected = 0;
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        };
        self.selected = self.game.current_step();
    }

    fn send(&mut self, command: Command) {
        if self.game.dispatch(command) {
            self.selected = self.game.current_step();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Color::Green)
    }
}
