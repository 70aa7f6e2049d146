//! Game engines.
//!
//! - `slide`: 2048
//! - `chess`: move legality on an 8×8 board
//! - `tictactoe`: placement validation and win detection

pub mod chess;
pub mod slide;
pub mod tictactoe;
