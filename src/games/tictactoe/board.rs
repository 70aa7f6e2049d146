//! Tic-tac-toe state, placement and line scanning.
//!
//! Positions at this API are 1-based: `(1, 1)` is the top-left cell and
//! `(3, 3)` the bottom-right.

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, instrument};

use super::validation::{MoveValidation, ValidationReason};
use crate::core::{Grid, Position};
use crate::error::EngineError;

/// Side length.
pub const BOARD_SIZE: usize = 3;

/// A player's marker. X moves first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Marker {
    #[default]
    X,
    O,
}

impl Marker {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// 3×3 board, side to move and win flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToe {
    grid: Grid<Marker>,
    turn: Marker,
    is_won: bool,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Empty board, X to move.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(BOARD_SIZE),
            turn: Marker::X,
            is_won: false,
        }
    }

    #[must_use]
    pub fn turn(&self) -> Marker {
        self.turn
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.is_won
    }

    /// Full board and no winning line.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        !self.is_won && self.grid.is_full()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won || self.is_draw()
    }

    /// Marker at a 1-based position; `None` if empty or off the board.
    #[must_use]
    pub fn marker_at(&self, position: Position) -> Option<Marker> {
        self.grid.get(to_cell(position)).copied()
    }

    /// Check a placement without applying it.
    ///
    /// Checks run in this order and the first failure is reported: bounds,
    /// occupancy, turn, game already won. Bounds come first so an off-board
    /// position never reaches the grid lookup.
    #[must_use]
    pub fn validate_move(&self, position: Position, marker: Marker) -> MoveValidation {
        let cell = to_cell(position);

        let reason = if !self.grid.contains(cell) {
            ValidationReason::OutOfBounds
        } else if self.grid.get(cell).is_some() {
            ValidationReason::Occupied
        } else if marker != self.turn {
            ValidationReason::WrongTurn
        } else if self.is_won {
            ValidationReason::GameWon
        } else {
            ValidationReason::Valid
        };

        reason.into()
    }

    /// Write `marker`, hand the turn to the other marker and rescan lines.
    ///
    /// Does not validate beyond bounds; pair with `validate_move`, or use
    /// `try_place`.
    #[instrument(level = "debug", skip(self))]
    pub fn place_marker(&mut self, position: Position, marker: Marker) -> Result<(), EngineError> {
        let cell = to_cell(position);
        if !self.grid.contains(cell) {
            return Err(EngineError::OutOfBounds {
                position,
                size: BOARD_SIZE,
            });
        }

        self.grid.place(cell, marker);
        self.turn = marker.other();
        self.is_won = self.has_winning_line();

        debug!(is_won = self.is_won, next = %self.turn, "marker placed");
        Ok(())
    }

    /// Validate, then place.
    pub fn try_place(&mut self, position: Position, marker: Marker) -> Result<(), EngineError> {
        let validation = self.validate_move(position, marker);
        if !validation.is_valid {
            return Err(EngineError::InvalidPlacement {
                reason: validation.reason,
            });
        }
        self.place_marker(position, marker)
    }

    /// Any full row, column or diagonal of one marker.
    #[must_use]
    pub fn has_winning_line(&self) -> bool {
        self.winner().is_some()
    }

    /// Marker holding a complete line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Marker> {
        lines().find_map(|line| self.line_owner(&line))
    }

    fn line_owner(&self, line: &[Position; BOARD_SIZE]) -> Option<Marker> {
        let first = *self.grid.get(line[0])?;
        line[1..]
            .iter()
            .all(|&cell| self.grid.get(cell) == Some(&first))
            .then_some(first)
    }
}

/// Convert a 1-based position to a 0-based grid cell.
fn to_cell(position: Position) -> Position {
    position.offset(-1, -1)
}

/// Every row, column and both diagonals as 0-based cells.
fn lines() -> impl Iterator<Item = [Position; BOARD_SIZE]> {
    let n = BOARD_SIZE as i32;
    let rows = (0..n).map(|r| line(|i| Position::new(r, i)));
    let columns = (0..n).map(|c| line(|i| Position::new(i, c)));
    let diagonals = [
        line(|i| Position::new(i, i)),
        line(|i| Position::new(i, n - 1 - i)),
    ];

    rows.chain(columns).chain(diagonals)
}

fn line(cell: impl Fn(i32) -> Position) -> [Position; BOARD_SIZE] {
    std::array::from_fn(|i| cell(i as i32))
}

impl std::fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.grid.rows().enumerate() {
            if i > 0 {
                writeln!(f, "---+---+---")?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or("   ".to_string(), |m| format!(" {m} ")))
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: i32, column: i32) -> Position {
        Position::new(row, column)
    }

    fn board_with(cells: &[(i32, i32, Marker)]) -> TicTacToe {
        let mut game = TicTacToe::new();
        for &(row, column, marker) in cells {
            game.grid.place(to_cell(at(row, column)), marker);
        }
        game
    }

    #[test]
    fn test_new_game() {
        let game = TicTacToe::new();
        assert_eq!(game.turn(), Marker::X);
        assert!(!game.is_won());
        assert!(!game.is_draw());
        assert_eq!(game.marker_at(at(1, 1)), None);
    }

    #[test]
    fn test_lines_count() {
        assert_eq!(lines().count(), 8);
    }

    #[test]
    fn test_every_line_wins() {
        for line in lines() {
            let mut game = TicTacToe::new();
            for cell in line {
                game.grid.place(cell, Marker::O);
            }
            assert_eq!(game.winner(), Some(Marker::O), "line {line:?}");
        }
    }

    #[test]
    fn test_anti_diagonal() {
        let game = board_with(&[(1, 3, Marker::X), (2, 2, Marker::X), (3, 1, Marker::X)]);
        assert!(game.has_winning_line());
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let game = board_with(&[(1, 1, Marker::X), (2, 2, Marker::X), (3, 3, Marker::O)]);
        assert!(!game.has_winning_line());
    }

    #[test]
    fn test_place_flips_turn() {
        let mut game = TicTacToe::new();
        game.place_marker(at(2, 2), Marker::X).unwrap();

        assert_eq!(game.marker_at(at(2, 2)), Some(Marker::X));
        assert_eq!(game.turn(), Marker::O);
    }

    #[test]
    fn test_place_off_board() {
        let mut game = TicTacToe::new();
        let err = game.place_marker(at(0, 0), Marker::X).unwrap_err();
        assert_eq!(err, EngineError::OutOfBounds { position: at(0, 0), size: 3 });
        assert_eq!(game, TicTacToe::new());
    }

    #[test]
    fn test_draw() {
        // X O X / X O O / O X X
        let game = board_with(&[
            (1, 1, Marker::X),
            (1, 2, Marker::O),
            (1, 3, Marker::X),
            (2, 1, Marker::X),
            (2, 2, Marker::O),
            (2, 3, Marker::O),
            (3, 1, Marker::O),
            (3, 2, Marker::X),
            (3, 3, Marker::X),
        ]);
        assert!(!game.has_winning_line());
        assert!(game.is_draw());
        assert!(game.is_over());
    }

    #[test]
    fn test_display() {
        let game = board_with(&[(1, 1, Marker::X), (3, 3, Marker::O)]);
        let expected = " X |   |   \n---+---+---\n   |   |   \n---+---+---\n   |   | O \n";
        assert_eq!(game.to_string(), expected);
    }
}
