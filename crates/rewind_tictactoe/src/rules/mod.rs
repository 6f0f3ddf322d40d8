//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! the controller so they can be tested and reused in isolation.

pub mod coords;
pub mod draw;
pub mod win;

pub use coords::{Coords, cell_to_coords};
pub use draw::is_full;
pub use win::{Victory, WINNING_LINES, evaluate_board};
