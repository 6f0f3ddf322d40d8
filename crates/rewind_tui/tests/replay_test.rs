//! Tests for the headless replay command.

use rewind_tictactoe::{Command, GameStatus, Player};
use rewind_tui::replay::{parse_commands, render_text, replay, run};

#[test]
fn test_parse_commands() {
    let commands = parse_commands(&["play:0", "1", "jump:0"]).unwrap();
    assert_eq!(
        commands,
        [Command::Play(0), Command::Play(1), Command::Jump(0)]
    );
    assert!(parse_commands(&["rewind:3"]).is_err());
}

#[test]
fn test_replay_branches_history() {
    let commands = parse_commands(&["0", "1", "jump:0", "4"]).unwrap();
    let game = replay(&commands);
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.status(), GameStatus::InProgress { next: Player::O });
}

#[test]
fn test_render_text_marks_winner_and_active_step() {
    let game = replay(&parse_commands(&["0", "3", "1", "4", "2"]).unwrap());
    let text = render_text(&game.view());
    assert!(text.starts_with("Winner: X\n"));
    assert!(text.contains("[X]|[X]|[X]"));
    assert!(text.contains("* 6. Go to move #5 (row: 1, col: 3)"));
    assert!(text.contains("  1. Back to Start"));
}

#[test]
fn test_render_text_layout() {
    let game = replay(&parse_commands(&["4", "0"]).unwrap());
    assert_eq!(
        render_text(&game.view()),
        "Next player: X\n\n O |   |   \n---+---+---\n   | X |   \n---+---+---\n   |   |   \n\n  1. Back to Start\n  2. Go to move #1 (row: 2, col: 2)\n* 3. Go to move #2 (row: 1, col: 1)\n"
    );
}

#[test]
fn test_run_json() {
    let out = run(&["4"], true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["status_text"], "Next player: O");
    assert_eq!(value["cells"][4], "X");
    assert_eq!(value["moves"][1]["label"], "Go to move #1 (row: 2, col: 2)");
}

#[test]
fn test_run_rejects_bad_token() {
    assert!(run(&["play:four"], false).is_err());
}
