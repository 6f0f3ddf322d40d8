//! Alternating marks invariant: each step adds the right player's mark.

use super::super::{GameState, Player, Position, Square};
use super::Invariant;

/// Invariant: step `k` extends step `k - 1` by one mark of the player whose
/// turn it was, placed at the coordinates the entry records.
///
/// X places on odd steps, O on even ones.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().windows(2).enumerate().all(|(prev, pair)| {
            let [before, after] = pair else {
                return false;
            };
            let Some(coords) = after.coords() else {
                return false;
            };
            let Some(pos) = Position::from_coords(coords) else {
                return false;
            };
            before.board().get(pos) == Square::Empty
                && *after.board() == before.board().with_mark(pos, Player::for_step(prev))
        })
    }

    fn description() -> &'static str {
        "Each step adds one mark for the player to move at the recorded cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Game, HistoryEntry};

    #[test]
    fn test_played_game_holds() {
        let mut game = Game::new();
        for i in [4, 0, 8, 2] {
            game.apply_move(i);
        }
        assert!(AlternatingMarksInvariant::holds(game.state()));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut state = GameState::new();
        let first = Board::new().with_mark(Position::Center, Player::X);
        let second = first.with_mark(Position::TopLeft, Player::X);
        state
            .history
            .push(HistoryEntry::after_move(first, Position::Center.coords()));
        state
            .history
            .push(HistoryEntry::after_move(second, Position::TopLeft.coords()));
        assert!(!AlternatingMarksInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_coords_violates() {
        let mut state = GameState::new();
        let board = Board::new().with_mark(Position::Center, Player::X);
        state
            .history
            .push(HistoryEntry::after_move(board, Position::TopLeft.coords()));
        assert!(!AlternatingMarksInvariant::holds(&state));
    }
}
