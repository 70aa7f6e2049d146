//! Engine error type.
//!
//! Rejected moves are ordinary values (`bool`, `MoveValidation`) and never
//! reach this type. `EngineError` covers the cases where a caller broke an
//! engine precondition, plus snapshot codec failures.

use derive_more::{Display, Error};

use crate::core::Position;
use crate::games::chess::Move;
use crate::games::tictactoe::ValidationReason;

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A position does not address a cell of the board.
    #[display("position {position} is outside the {size}x{size} board")]
    OutOfBounds { position: Position, size: usize },

    /// A move names a source square with nothing on it.
    #[display("no piece at {position}")]
    EmptySquare { position: Position },

    /// A move that the legality check rejects.
    #[display("illegal move {mv}")]
    IllegalMove { mv: Move },

    /// A marker placement that validation rejects.
    #[display("invalid placement: {reason}")]
    InvalidPlacement { reason: ValidationReason },

    #[display("snapshot codec failed: {message}")]
    Snapshot { message: String },
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        Self::Snapshot {
            message: err.to_string(),
        }
    }
}
