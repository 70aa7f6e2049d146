//! Turn-keeping wrapper around `ChessBoard`.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::board::{ChessBoard, Move};
use super::piece::{Color, Piece, PieceKind};
use crate::core::Position;
use crate::error::EngineError;

/// A chess game in progress. White moves first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChessGame {
    board: ChessBoard,
    turn: Color,
}

impl ChessGame {
    /// Standard layout, White to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a custom board with `turn` to move.
    pub fn from_board(board: ChessBoard, turn: Color) -> Self {
        Self { board, turn }
    }

    #[must_use]
    pub fn board(&self) -> &ChessBoard {
        &self.board
    }

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Move the current side's piece from `from` to `to`.
    ///
    /// An illegal move returns `EngineError::IllegalMove` and changes
    /// nothing; the same side is still to move.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn))]
    pub fn play(&mut self, from: Position, to: Position) -> Result<Option<Piece>, EngineError> {
        let mv = Move::new(from, to, self.turn);
        if self.is_over() || !self.board.is_valid_move(&mv) {
            debug!(%mv, "rejected");
            return Err(EngineError::IllegalMove { mv });
        }

        let captured = self.board.play_move(&mv)?;
        self.turn = self.turn.opposite();
        Ok(captured)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.board.is_checkmate()
    }

    /// The side whose opponent lost their King.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.board
            .captured_by_color()
            .iter()
            .find(|(_, pieces)| pieces.iter().any(|p| p.kind == PieceKind::King))
            .map(|(color, _)| color.opposite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: i32, column: i32) -> Position {
        Position::new(row, column)
    }

    #[test]
    fn test_white_moves_first() {
        let mut game = ChessGame::new();
        assert_eq!(game.turn(), Color::White);

        let err = game.play(at(1, 0), at(2, 0)).unwrap_err();
        assert!(matches!(err, EngineError::IllegalMove { .. }));
        assert_eq!(game.turn(), Color::White);

        game.play(at(6, 0), at(5, 0)).unwrap();
        assert_eq!(game.turn(), Color::Black);
        game.play(at(1, 0), at(2, 0)).unwrap();
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn test_rejected_move_leaves_board() {
        let mut game = ChessGame::new();
        let before = game.clone();

        assert!(game.play(at(7, 0), at(3, 0)).is_err());
        assert!(game.play(Position::OFF_BOARD, at(3, 0)).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_king_capture_ends_game() {
        let mut board = ChessBoard::empty();
        board.place(Piece::new(PieceKind::Knight, Color::White, at(2, 3)));
        board.place(Piece::new(PieceKind::King, Color::Black, at(0, 4)));
        board.place(Piece::new(PieceKind::King, Color::White, at(7, 4)));
        let mut game = ChessGame::from_board(board, Color::White);

        let captured = game.play(at(2, 3), at(0, 4)).unwrap().unwrap();
        assert_eq!(captured.kind, PieceKind::King);
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Color::White));

        assert!(game.play(at(7, 4), at(6, 4)).is_err(), "no moves after checkmate");
    }

    #[test]
    fn test_no_winner_mid_game() {
        let game = ChessGame::new();
        assert_eq!(game.winner(), None);
        assert!(!game.is_over());
    }
}
