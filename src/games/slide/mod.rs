//! 2048: slide-and-merge on a square grid.
//!
//! - `SlideBoard` holds the grid, score and playability flag and implements
//!   the move primitive.
//! - `SlideGame` owns a board, a seeded `GameRng` and a `SlideConfig`, and
//!   spawns a tile after every move that changed the board. The game ends
//!   when no direction can move.
//!
//! ```
//! use grid_games::games::slide::{Direction, SlideConfig, SlideGame};
//!
//! let mut game = SlideGame::new(SlideConfig::default().with_seed(1));
//! let cycle = [Direction::Left, Direction::Down, Direction::Right, Direction::Up];
//! for direction in cycle.iter().cycle() {
//!     if game.is_over() {
//!         break;
//!     }
//!     game.step(*direction);
//! }
//! assert!(game.is_won() || !game.board().is_playable());
//! ```

mod board;
mod config;
mod direction;
mod game;

pub use board::{SlideBoard, SlideOutcome, DEFAULT_TILE_VALUES};
pub use config::SlideConfig;
pub use direction::Direction;
pub use game::{SlideGame, SlideSnapshot};
