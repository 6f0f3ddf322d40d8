//! Game controller: owns the state and applies user commands.

use super::action::Command;
use super::history::HistoryEntry;
use super::invariants::{GameInvariants, InvariantSet};
use super::position::Position;
use super::rules::{Victory, evaluate_board};
use super::state::GameState;
use super::types::{Board, Player, Square};
use super::view::{GameView, MoveItem};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Status of the displayed step, derived from the board on every read.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("Next player: {next}")]
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// A line was completed.
    #[display("Winner: {winner}")]
    Won {
        /// Owner of the line.
        winner: Player,
        /// Cells of the first winning line.
        line: [usize; 3],
    },
    /// All nine cells filled without a line.
    #[display("It's a draw")]
    Draw,
}

impl GameStatus {
    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// Tic-tac-toe controller with a navigable move history.
///
/// Illegal commands are silent no-ops: they leave the state untouched and
/// report `false`, nothing more.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game with X to move on an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Every recorded history entry.
    pub fn history(&self) -> &[HistoryEntry] {
        self.state.history()
    }

    /// Index of the displayed step.
    pub fn current_step(&self) -> usize {
        self.state.current_step()
    }

    /// True when X plays next.
    pub fn x_is_next(&self) -> bool {
        self.state.x_is_next()
    }

    /// Board at the displayed step.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Plays the next mark into cell `index` (0-8).
    ///
    /// Does nothing and returns `false` if the index is not a cell, the cell
    /// is taken, or the displayed board already has a winner. Otherwise
    /// discards any history past the displayed step, appends the new board
    /// and advances to it.
    #[instrument(skip(self), fields(step = self.state.current_step))]
    pub fn apply_move(&mut self, index: usize) -> bool {
        let Some(pos) = Position::from_index(index) else {
            return false;
        };
        let board = self.state.board();
        if !board.is_empty(pos) || evaluate_board(board).is_some() {
            return false;
        }

        let player = self.state.to_move();
        let next = board.with_mark(pos, player);
        let discarded = self.state.history.len() - (self.state.current_step + 1);
        self.state.history.truncate(self.state.current_step + 1);
        self.state
            .history
            .push(HistoryEntry::after_move(next, pos.coords()));
        self.state.current_step += 1;

        debug!(
            %player,
            position = %pos,
            step = self.state.current_step,
            discarded,
            "Move applied"
        );
        self.assert_invariants();
        true
    }

    /// Shows the board at `step` without touching the history.
    ///
    /// Returns `false` and does nothing when `step` is past the last entry.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.state.history.len() {
            return false;
        }
        self.state.current_step = step;
        debug!(step, x_is_next = self.state.x_is_next(), "Jumped");
        true
    }

    /// Routes a command to [`apply_move`](Self::apply_move) or
    /// [`jump_to`](Self::jump_to).
    pub fn dispatch(&mut self, command: Command) -> bool {
        match command {
            Command::Play(index) => self.apply_move(index),
            Command::Jump(step) => self.jump_to(step),
        }
    }

    /// Drops the whole history and starts over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
        debug!("Game reset");
    }

    /// Status of the displayed step.
    pub fn status(&self) -> GameStatus {
        match evaluate_board(self.board()) {
            Some(Victory { winner, line }) => GameStatus::Won { winner, line },
            None if self.state.current_step == 9 => GameStatus::Draw,
            None => GameStatus::InProgress {
                next: self.state.to_move(),
            },
        }
    }

    /// Cells of the winning line on the displayed board.
    pub fn winning_squares(&self) -> Option<[usize; 3]> {
        evaluate_board(self.board()).map(|v| v.line)
    }

    /// History list items, one per step.
    pub fn moves(&self) -> Vec<MoveItem> {
        self.history()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveItem {
                step,
                label: entry.label(step),
                active: step == self.state.current_step,
            })
            .collect()
    }

    /// Snapshot of everything a presentation layer renders.
    pub fn view(&self) -> GameView {
        let status = self.status();
        GameView {
            status_text: status.to_string(),
            status,
            cells: (*self.board().squares()).map(Square::player),
            winning_squares: self.winning_squares().map(Vec::from).unwrap_or_default(),
            moves: self.moves(),
            current_step: self.state.current_step,
            x_is_next: self.state.x_is_next(),
        }
    }

    fn assert_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = GameInvariants::check_all(&self.state)
        {
            panic!("game state invariants violated: {violations:?}");
        }
    }
}
