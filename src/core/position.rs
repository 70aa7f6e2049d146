//! Grid addressing.
//!
//! A `Position` is a `(row, column)` pair. Coordinates are signed so that a
//! position computed from user input or from a piece offset can point off the
//! board; every engine bounds-checks before it touches a cell.
//!
//! ```
//! use grid_games::core::Position;
//!
//! let start = Position::new(6, 4);
//! assert_eq!(start.offset(-1, 0), Position::new(5, 4));
//! assert_eq!(start.to_string(), "(6, 4)");
//! ```

use serde::{Deserialize, Serialize};

/// A zero-based `(row, column)` cell address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    /// Top-left cell.
    pub const ORIGIN: Position = Position::new(0, 0);

    /// A position that lies outside every grid.
    pub const OFF_BOARD: Position = Position::new(-1, -1);

    #[must_use]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Shift by a row and column delta, saturating at the `i32` range.
    #[must_use]
    pub const fn offset(self, rows: i32, columns: i32) -> Self {
        Self::new(
            self.row.saturating_add(rows),
            self.column.saturating_add(columns),
        )
    }

    /// Signed `(row, column)` displacement from `self` to `other`.
    #[must_use]
    pub const fn delta_to(self, other: Position) -> (i32, i32) {
        (other.row - self.row, other.column - self.column)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
