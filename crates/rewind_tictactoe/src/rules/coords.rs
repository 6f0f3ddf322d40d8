//! Cell index to history coordinates.

use serde::{Deserialize, Serialize};

/// One-based row and column of a cell, as shown in move descriptions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("row: {row}, col: {col}")]
pub struct Coords {
    /// Row, 1 (top) to 3 (bottom).
    pub row: usize,
    /// Column, 1 (left) to 3 (right).
    pub col: usize,
}

/// Maps a row-major cell index to one-based coordinates.
pub fn cell_to_coords(index: usize) -> Coords {
    Coords {
        row: index / 3 + 1,
        col: index % 3 + 1,
    }
}
