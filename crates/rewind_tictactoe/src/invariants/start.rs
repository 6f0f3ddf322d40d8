//! Structural invariants: the history starts empty and the step points into it.

use super::super::{GameState, HistoryEntry};
use super::Invariant;

/// Invariant: history is non-empty and entry 0 is the empty starting board.
pub struct StartsEmptyInvariant;

impl Invariant<GameState> for StartsEmptyInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().first() == Some(&HistoryEntry::start())
    }

    fn description() -> &'static str {
        "History begins with the empty starting board"
    }
}

/// Invariant: the current step indexes an existing history entry.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_step() < state.history().len()
    }

    fn description() -> &'static str {
        "Current step is within the history"
    }
}
