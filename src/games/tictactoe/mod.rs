//! Tic-tac-toe on a 3×3 board.
//!
//! Positions are 1-based at this API. `validate_move` reports the first
//! problem with a placement; `place_marker` applies one and rescans all
//! eight lines for a win.
//!
//! ```
//! use grid_games::core::Position;
//! use grid_games::games::tictactoe::{Marker, TicTacToe, ValidationReason};
//!
//! let mut game = TicTacToe::new();
//! game.try_place(Position::new(2, 2), Marker::X).unwrap();
//!
//! let check = game.validate_move(Position::new(2, 2), Marker::O);
//! assert_eq!(check.reason, ValidationReason::Occupied);
//! ```

mod board;
mod validation;

pub use board::{Marker, TicTacToe, BOARD_SIZE};
pub use validation::{MoveValidation, ValidationReason};
