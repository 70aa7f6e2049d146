//! Chess move legality.
//!
//! Not a full chess engine: there is no check detection, castling, en
//! passant or promotion, and pawns never make a two-square opening move.
//! The game ends when a King is captured.
//!
//! ```
//! use grid_games::core::Position;
//! use grid_games::games::chess::{ChessBoard, Color, Move};
//!
//! let mut board = ChessBoard::standard();
//! let mv = Move::new(Position::new(6, 4), Position::new(5, 4), Color::White);
//!
//! assert!(board.is_valid_move(&mv));
//! assert_eq!(board.play_move(&mv).unwrap(), None);
//! ```

mod board;
mod game;
mod piece;

pub use board::{ChessBoard, Move, MoveRecord, BOARD_SIZE};
pub use game::ChessGame;
pub use piece::{ByColor, Color, Piece, PieceKind};
