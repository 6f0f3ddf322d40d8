//! Rewind tic-tac-toe: game rules and a controller with a navigable history.
//!
//! # Architecture
//!
//! - **Rules**: pure functions, [`evaluate_board`] and [`cell_to_coords`]
//! - **Controller**: [`Game`] owns a [`GameState`] and accepts [`Command`]s
//! - **Invariants**: properties of the state checked after each move
//! - **View**: [`GameView`], the snapshot a front-end renders
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! game.apply_move(0);
//! game.apply_move(4);
//! game.jump_to(1);
//! game.apply_move(8);
//!
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use action::{Command, CommandParseError};
pub use game::{Game, GameStatus};
pub use history::HistoryEntry;
pub use position::Position;
pub use rules::{Coords, Victory, WINNING_LINES, cell_to_coords, evaluate_board, is_full};
pub use state::GameState;
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveItem};

/// Content of an occupied cell.
pub type Mark = Player;
