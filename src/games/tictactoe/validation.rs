//! Placement validation results.

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

/// Why a placement was accepted or rejected. Displays as the message shown
/// to the player.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, IntoStaticStr,
)]
pub enum ValidationReason {
    #[strum(to_string = "This move is perfectly valid")]
    Valid,
    #[strum(to_string = "Marker already placed in this position")]
    Occupied,
    #[strum(to_string = "Marker is not within the board")]
    OutOfBounds,
    #[strum(to_string = "It is not this player's turn")]
    WrongTurn,
    #[strum(to_string = "The game is already won")]
    GameWon,
}

impl ValidationReason {
    /// Message shown to the player.
    #[must_use]
    pub fn message(self) -> &'static str {
        self.into()
    }
}

/// Outcome of `TicTacToe::validate_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveValidation {
    pub is_valid: bool,
    pub reason: ValidationReason,
}

impl From<ValidationReason> for MoveValidation {
    fn from(reason: ValidationReason) -> Self {
        Self {
            is_valid: reason == ValidationReason::Valid,
            reason,
        }
    }
}
