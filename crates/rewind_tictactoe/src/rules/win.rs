//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Winning lines in priority order: rows top to bottom, columns left to
/// right, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line: who made it and which cells it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Victory {
    /// The player owning all three cells.
    pub winner: Player,
    /// Cell indices of the line, as listed in [`WINNING_LINES`].
    pub line: [usize; 3],
}

/// Finds the first winning line on the board.
///
/// Lines are checked in [`WINNING_LINES`] order and the first one whose
/// three cells hold the same mark is reported. Returns `None` when no line
/// is complete.
#[instrument(skip(board))]
pub fn evaluate_board(board: &Board) -> Option<Victory> {
    let squares = board.squares();
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match squares[a] {
            Square::Occupied(winner) if squares[b] == squares[a] && squares[c] == squares[a] => {
                Some(Victory { winner, line })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn board_from(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(i, player) in marks {
            board.set(Position::from_index(i).unwrap(), Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate_board(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(
            evaluate_board(&board),
            Some(Victory {
                winner: Player::X,
                line: [0, 1, 2]
            })
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from(&[(2, Player::O), (4, Player::O), (6, Player::O)]);
        assert_eq!(
            evaluate_board(&board),
            Some(Victory {
                winner: Player::O,
                line: [2, 4, 6]
            })
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_from(&[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(evaluate_board(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins_tie_break() {
        // Top row and left column both complete; the row comes first.
        let board = board_from(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
        ]);
        assert_eq!(evaluate_board(&board).map(|v| v.line), Some([0, 1, 2]));
    }
}
