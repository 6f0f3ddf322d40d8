//! Move history entries.

use super::rules::Coords;
use super::types::Board;
use serde::{Deserialize, Serialize};

/// One board snapshot in the move history.
///
/// The first entry is the empty starting board and carries no coordinates;
/// every later entry records where the move that produced it was played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    coords: Option<Coords>,
}

impl HistoryEntry {
    /// The starting entry: empty board, no move.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            coords: None,
        }
    }

    /// An entry produced by a move at `coords`.
    pub fn after_move(board: Board, coords: Coords) -> Self {
        Self {
            board,
            coords: Some(coords),
        }
    }

    /// Board after this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Coordinates of the move that produced this entry.
    pub fn coords(&self) -> Option<Coords> {
        self.coords
    }

    /// Label of the history button for this entry at `step`.
    ///
    /// # Panics
    ///
    /// If `step` is past the start but the entry records no move; every
    /// entry after the first is built by [`after_move`](Self::after_move).
    pub fn label(&self, step: usize) -> String {
        match (step, self.coords) {
            (0, _) => "Back to Start".to_string(),
            (n, Some(coords)) => format!("Go to move #{n} ({coords})"),
            (n, None) => unreachable!("history step {n} has no move coordinates"),
        }
    }
}
