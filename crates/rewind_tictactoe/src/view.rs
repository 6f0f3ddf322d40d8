//! Read-only snapshot consumed by presentation layers.

use super::game::GameStatus;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// One button in the move-history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveItem {
    /// History step this item jumps to.
    pub step: usize,
    /// `Back to Start` or `Go to move #n (row: r, col: c)`.
    pub label: String,
    /// True for the step currently displayed.
    pub active: bool,
}

/// Everything needed to draw the game at the displayed step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Derived status.
    pub status: GameStatus,
    /// Status line text.
    pub status_text: String,
    /// Cell marks in row-major order.
    pub cells: [Option<Player>; 9],
    /// Cells to highlight; empty unless the game is won.
    pub winning_squares: Vec<usize>,
    /// History list.
    pub moves: Vec<MoveItem>,
    /// Displayed step.
    pub current_step: usize,
    /// True when X plays next.
    pub x_is_next: bool,
}
