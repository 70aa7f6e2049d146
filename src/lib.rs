//! # grid-games
//!
//! Rule engines for three turn-based games played on square grids.
//!
//! ## Engines
//!
//! 1. **2048** (`games::slide`): slide-and-merge moves in four directions,
//!    scoring, seeded tile spawning and game-over detection.
//!
//! 2. **Chess** (`games::chess`): per-piece movement rules, path blocking,
//!    captures and end-by-King-capture.
//!
//! 3. **Tic-tac-toe** (`games::tictactoe`): placement validation and
//!    three-in-a-row detection.
//!
//! ## Shared pieces
//!
//! - `core`: `Position`, the generic `Grid`, the seeded `GameRng` and
//!   text-to-position parsing
//! - `error`: `EngineError`
//!
//! Engines are deterministic: given the same seed and the same inputs a
//! 2048 game spawns the same tiles.

pub mod core;
pub mod error;
pub mod games;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, Grid, Position, RandomSource};
pub use crate::error::EngineError;

pub use crate::games::slide::{Direction, SlideBoard, SlideConfig, SlideGame, SlideOutcome};

pub use crate::games::chess::{ChessBoard, ChessGame, Color, Move, Piece, PieceKind};

pub use crate::games::tictactoe::{Marker, MoveValidation, TicTacToe, ValidationReason};
