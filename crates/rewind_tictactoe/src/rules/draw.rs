//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::evaluate_board;
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / X O O / O X X
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
        ];
        let board = Board::from_squares(marks.map(Square::Occupied));
        assert!(is_full(&board));
        assert_eq!(evaluate_board(&board), None);
    }
}
