//! Game state: the move history and the step currently shown.

use super::history::HistoryEntry;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Complete game state.
///
/// Whose turn it is is derived from `current_step`, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_step: usize,
}

impl GameState {
    /// Creates the initial state: one empty-board entry, step 0.
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            current_step: 0,
        }
    }

    /// Every recorded step, including the abandoned-future tail that
    /// survives until the next move from an earlier step.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the step being displayed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Entry at the current step.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.current_step]
    }

    /// Board at the current step.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// True when X plays next.
    pub fn x_is_next(&self) -> bool {
        self.current_step % 2 == 0
    }

    /// The player who plays next.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.current_step)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
