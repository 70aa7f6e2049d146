//! Chess board: move validation and application.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument};

use super::piece::{ByColor, Color, Piece, PieceKind};
use crate::core::{Grid, Position};
use crate::error::EngineError;

/// Board side length.
pub const BOARD_SIZE: usize = 8;

const BACK_ROW: [PieceKind; BOARD_SIZE] = [
    PieceKind::Castle,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Castle,
];

/// A requested move, tagged with the side claiming to make it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub turn: Color,
}

impl Move {
    #[must_use]
    pub const fn new(from: Position, to: Position, turn: Color) -> Self {
        Self { from, to, turn }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.turn, self.from, self.to)
    }
}

/// A move that was applied, with whatever it captured.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mv: Move,
    pub captured: Option<Piece>,
}

/// 8×8 chess board with capture bookkeeping.
///
/// Captured pieces are grouped by their own colour: a black pawn taken by
/// White lands in `captured(Color::Black)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChessBoard {
    grid: Grid<Piece>,
    is_checkmate: bool,
    captured: ByColor<Vec<Piece>>,
    history: Vector<MoveRecord>,
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::standard()
    }
}

impl ChessBoard {
    /// A board with no pieces.
    pub fn empty() -> Self {
        Self {
            grid: Grid::new(BOARD_SIZE),
            is_checkmate: false,
            captured: ByColor::default(),
            history: Vector::new(),
        }
    }

    /// The standard starting layout. Black occupies rows 0-1, White rows 6-7.
    pub fn standard() -> Self {
        let mut board = Self::empty();

        for (column, &kind) in BACK_ROW.iter().enumerate() {
            let column = column as i32;
            board.place(Piece::new(kind, Color::Black, Position::new(0, column)));
            board.place(Piece::new(PieceKind::Pawn, Color::Black, Position::new(1, column)));
            board.place(Piece::new(PieceKind::Pawn, Color::White, Position::new(6, column)));
            board.place(Piece::new(kind, Color::White, Position::new(7, column)));
        }

        board
    }

    /// Put a piece on the cell its `position` names, replacing any occupant.
    ///
    /// Panics if the position is off the board.
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        self.grid.place(piece.position, piece)
    }

    #[must_use]
    pub fn grid(&self) -> &Grid<Piece> {
        &self.grid
    }

    #[must_use]
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.grid.get(position)
    }

    /// True once a King has been captured.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_checkmate
    }

    /// Pieces of `color` that have been captured, in capture order.
    #[must_use]
    pub fn captured(&self, color: Color) -> &[Piece] {
        &self.captured[color]
    }

    /// All captured pieces, grouped by the captured piece's colour.
    #[must_use]
    pub fn captured_by_color(&self) -> &ByColor<Vec<Piece>> {
        &self.captured
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Check whether `position` is on the board.
    #[must_use]
    pub fn is_within_board(&self, position: Position) -> bool {
        self.grid.contains(position)
    }

    /// Full legality check for `mv`.
    ///
    /// Both ends must be on the board, the source must hold a piece of
    /// `mv.turn`, the target must not hold a piece of the same colour, and
    /// the piece's movement rule must allow the target.
    #[must_use]
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        if !self.is_within_board(mv.from) || !self.is_within_board(mv.to) {
            return false;
        }

        let Some(piece) = self.grid.get(mv.from) else {
            return false;
        };

        piece.color == mv.turn
            && self.target_not_occupied_by(mv.turn, mv.to)
            && piece.can_move_to(mv.to, &self.grid)
    }

    fn target_not_occupied_by(&self, color: Color, target: Position) -> bool {
        self.grid.get(target).map_or(true, |piece| piece.color != color)
    }

    /// Every target the piece on `from` may legally move to.
    ///
    /// Empty when `from` is empty or off the board.
    #[must_use]
    pub fn legal_targets(&self, from: Position) -> SmallVec<[Position; 32]> {
        let Some(piece) = self.grid.get(from) else {
            return SmallVec::new();
        };

        (0..BOARD_SIZE as i32)
            .flat_map(|row| (0..BOARD_SIZE as i32).map(move |column| Position::new(row, column)))
            .filter(|&to| self.is_valid_move(&Move::new(from, to, piece.color)))
            .collect()
    }

    /// Apply a move already accepted by `is_valid_move`.
    ///
    /// Movement rules are not re-checked. Off-board positions and an empty
    /// source are still rejected, leaving the board untouched. Returns the
    /// captured piece, if any.
    #[instrument(level = "debug", skip(self, mv), fields(mv = %mv))]
    pub fn play_move(&mut self, mv: &Move) -> Result<Option<Piece>, EngineError> {
        for position in [mv.from, mv.to] {
            if !self.is_within_board(position) {
                return Err(EngineError::OutOfBounds {
                    position,
                    size: BOARD_SIZE,
                });
            }
        }

        let Some(mut piece) = self.grid.take(mv.from) else {
            return Err(EngineError::EmptySquare { position: mv.from });
        };

        piece.position = mv.to;
        let captured = self.grid.place(mv.to, piece);

        if let Some(victim) = captured {
            debug!(%victim, "captured");
            if victim.kind == PieceKind::King {
                debug!(color = %victim.color, "king captured");
                self.is_checkmate = true;
            }
            self.captured[victim.color].push(victim);
        }

        self.history.push_back(MoveRecord { mv: *mv, captured });
        Ok(captured)
    }
}

impl std::fmt::Display for ChessBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for column in 0..BOARD_SIZE {
            write!(f, " {column}")?;
        }
        writeln!(f)?;

        for (row, cells) in self.grid.rows().enumerate() {
            write!(f, "{row} ")?;
            for cell in cells {
                let symbol = cell.as_ref().map_or('.', Piece::symbol);
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
