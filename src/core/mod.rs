//! Core building blocks shared by every game: positions, grids, RNG, input.
//!
//! Nothing in here knows the rules of any particular game.

pub mod position;
pub mod grid;
pub mod rng;
pub mod input;

pub use position::Position;
pub use grid::Grid;
pub use rng::{GameRng, GameRngState, RandomSource};
pub use input::{parse_move, parse_position, parse_position_or};
