//! History consistency invariants: mark counts and terminal positions.

use super::super::rules::{evaluate_board, is_full};
use super::super::GameState;
use super::Invariant;

/// Invariant: the board at step `k` has exactly `k` marks.
pub struct OneMarkPerStepInvariant;

impl Invariant<GameState> for OneMarkPerStepInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .iter()
            .enumerate()
            .all(|(k, entry)| entry.board().occupied_count() == k)
    }

    fn description() -> &'static str {
        "Board at step k has exactly k marks"
    }
}

/// Invariant: a won or full board is always the last history entry.
pub struct NothingAfterTerminalInvariant;

impl Invariant<GameState> for NothingAfterTerminalInvariant {
    fn holds(state: &GameState) -> bool {
        let last = state.history().len().saturating_sub(1);
        state.history().iter().enumerate().all(|(k, entry)| {
            let terminal = evaluate_board(entry.board()).is_some() || is_full(entry.board());
            !terminal || k == last
        })
    }

    fn description() -> &'static str {
        "No step follows a won or full board"
    }
}
