//! Move directions and their rotation counts.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Direction tiles slide in.
///
/// Parses from the full name or the matching WASD key, ignoring case.
///
/// ```
/// use grid_games::games::slide::Direction;
///
/// assert_eq!("Up".parse::<Direction>().unwrap(), Direction::Up);
/// assert_eq!("a".parse::<Direction>().unwrap(), Direction::Left);
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "up", serialize = "w")]
    Up,
    #[strum(to_string = "right", serialize = "d")]
    Right,
    #[strum(to_string = "down", serialize = "s")]
    Down,
    #[strum(to_string = "left", serialize = "a")]
    Left,
}

impl Direction {
    /// Clockwise quarter turns that make motion in this direction become
    /// motion to the left.
    ///
    /// One clockwise turn maps Down to Left, Right to Down and Up to Right.
    #[must_use]
    pub const fn clockwise_turns_to_left(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }

    /// Clockwise quarter turns that undo `clockwise_turns_to_left`.
    #[must_use]
    pub const fn clockwise_turns_back(self) -> usize {
        (4 - self.clockwise_turns_to_left()) % 4
    }
}
