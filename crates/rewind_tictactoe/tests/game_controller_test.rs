//! Tests for the game controller: moves, history branching and status.

use rewind_tictactoe::{Command, Coords, Game, GameStatus, Player, Square, evaluate_board};

fn play(moves: &[usize]) -> Game {
    let mut game = Game::new();
    for &i in moves {
        assert!(game.apply_move(i), "move {i} should be legal");
    }
    game
}

#[test]
fn test_occupied_cell_is_noop() {
    let mut game = play(&[4]);
    let before = game.clone();

    assert!(!game.apply_move(4));
    assert_eq!(game, before);
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.current_step(), 1);
    assert!(!game.x_is_next());
}

#[test]
fn test_moves_after_win_are_noops() {
    // X: 0 1 2, O: 3 4
    let mut game = play(&[0, 3, 1, 4, 2]);
    assert_eq!(
        game.status(),
        GameStatus::Won {
            winner: Player::X,
            line: [0, 1, 2]
        }
    );
    let frozen = game.clone();
    for i in [5, 6, 7, 8] {
        assert!(!game.apply_move(i));
    }
    assert_eq!(game, frozen);
    assert_eq!(game.winning_squares(), Some([0, 1, 2]));
}

#[test]
fn test_branching_discards_abandoned_future() {
    let mut game = play(&[0, 1]);
    assert!(game.jump_to(0));
    assert!(game.apply_move(4));

    assert_eq!(game.history().len(), 2);
    assert_eq!(game.current_step(), 1);
    let board = game.board();
    assert_eq!(board.square(0), Some(Square::Empty));
    assert_eq!(board.square(1), Some(Square::Empty));
    assert_eq!(board.square(4), Some(Square::Occupied(Player::X)));
    assert_eq!(game.history()[1].coords(), Some(Coords { row: 2, col: 2 }));
}

#[test]
fn test_jump_keeps_history_and_sets_parity() {
    let mut game = play(&[0, 1, 2, 3]);
    for step in 0..=4 {
        assert!(game.jump_to(step));
        assert_eq!(game.history().len(), 5);
        assert_eq!(game.x_is_next(), step % 2 == 0);
        assert_eq!(game.board().occupied_count(), step);
    }
}

#[test]
fn test_jump_out_of_range_is_noop() {
    let mut game = play(&[0, 1]);
    let before = game.clone();
    assert!(!game.jump_to(3));
    assert_eq!(game, before);
}

#[test]
fn test_jump_back_from_won_board_unfreezes() {
    let mut game = play(&[0, 3, 1, 4, 2]);
    assert!(game.jump_to(4));
    assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
    assert!(game.apply_move(8));
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.winning_squares(), None);
}

#[test]
fn test_draw_at_step_nine() {
    // X O X / X O O / O X X
    let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(evaluate_board(game.board()), None);
    assert_eq!(game.current_step(), 9);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "It's a draw");
}

#[test]
fn test_history_labels() {
    let game = play(&[0, 5]);
    let labels: Vec<_> = game.moves().into_iter().map(|m| m.label).collect();
    assert_eq!(
        labels,
        [
            "Back to Start",
            "Go to move #1 (row: 1, col: 1)",
            "Go to move #2 (row: 2, col: 3)",
        ]
    );
}

#[test]
fn test_active_move_follows_jumps() {
    let mut game = play(&[0, 5, 8]);
    game.jump_to(1);
    let active: Vec<_> = game.moves().iter().map(|m| m.active).collect();
    assert_eq!(active, [false, true, false, false]);
}

#[test]
fn test_dispatch_routes_commands() {
    let mut game = Game::new();
    for cmd in ["play:0", "play:1", "jump:0", "4"] {
        game.dispatch(cmd.parse::<Command>().unwrap());
    }
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.board().square(4), Some(Square::Occupied(Player::X)));
}

#[test]
fn test_view_snapshot() {
    let game = play(&[0, 3, 1, 4, 2]);
    let view = game.view();
    assert_eq!(view.status_text, "Winner: X");
    assert_eq!(view.winning_squares, vec![0, 1, 2]);
    assert_eq!(view.cells[3], Some(Player::O));
    assert_eq!(view.cells[8], None);
    assert_eq!(view.moves.len(), 6);
    assert_eq!(view.current_step, 5);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["status_text"], "Winner: X");
    assert_eq!(json["x_is_next"], false);
}
