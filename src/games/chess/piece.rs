//! Pieces, colours and per-kind movement rules.
//!
//! `Piece::can_move_to` answers whether a piece may reach a target given
//! only board occupancy. It knows nothing about turns or friendly fire;
//! `ChessBoard::is_valid_move` layers those on top.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use strum::{Display, EnumIter};

use crate::core::{Grid, Position};

/// Side colour. Black starts on rows 0-1 and moves towards higher rows.
/// White moves first.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Color {
    Black,
    #[default]
    White,
}

impl Color {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Row delta of a pawn's forward step.
    #[must_use]
    pub const fn forward(self) -> i32 {
        match self {
            Color::Black => 1,
            Color::White => -1,
        }
    }
}

/// One value per colour, indexed by `Color`.
///
/// ```
/// use grid_games::games::chess::{ByColor, Color};
///
/// let mut counts: ByColor<u32> = ByColor::default();
/// counts[Color::White] += 2;
/// assert_eq!(counts[Color::White], 2);
/// assert_eq!(counts[Color::Black], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ByColor<T> {
    black: T,
    white: T,
}

impl<T> ByColor<T> {
    /// Iterate over `(Color, &T)` pairs, Black first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        [(Color::Black, &self.black), (Color::White, &self.white)].into_iter()
    }
}

impl<T> Index<Color> for ByColor<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }
}

impl<T> IndexMut<Color> for ByColor<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }
}

/// Kind of piece. `Castle` is the rook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum PieceKind {
    Pawn,
    King,
    Queen,
    Knight,
    Castle,
    Bishop,
}

impl PieceKind {
    /// Single-letter symbol, upper case.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Knight => 'N',
            PieceKind::Castle => 'R',
            PieceKind::Bishop => 'B',
        }
    }
}

/// A piece on the board. `position` always equals the cell holding it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Position,
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        Self {
            kind,
            color,
            position,
        }
    }

    /// Board symbol: upper case for White, lower case for Black.
    #[must_use]
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.symbol(),
            Color::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }

    /// Whether this piece's movement rule allows reaching `target`.
    ///
    /// Off-grid targets are never reachable. Staying in place is never a move.
    #[must_use]
    pub fn can_move_to(&self, target: Position, grid: &Grid<Piece>) -> bool {
        if !grid.contains(target) {
            return false;
        }
        let (rows, columns) = self.position.delta_to(target);
        if (rows, columns) == (0, 0) {
            return false;
        }

        match self.kind {
            PieceKind::Pawn => self.pawn_can_reach(target, rows, columns, grid),
            PieceKind::King => rows.abs() <= 1 && columns.abs() <= 1,
            PieceKind::Knight => {
                matches!((rows.abs(), columns.abs()), (1, 2) | (2, 1))
            }
            PieceKind::Castle => castle_can_reach(self.position, target, grid),
            PieceKind::Bishop => bishop_can_reach(self.position, target, grid),
            PieceKind::Queen => {
                castle_can_reach(self.position, target, grid)
                    || bishop_can_reach(self.position, target, grid)
            }
        }
    }

    fn pawn_can_reach(&self, target: Position, rows: i32, columns: i32, grid: &Grid<Piece>) -> bool {
        if rows != self.color.forward() {
            return false;
        }

        let occupied = grid.get(target).is_some();
        match columns.abs() {
            0 => !occupied,
            1 => occupied,
            _ => false,
        }
    }
}

fn castle_can_reach(from: Position, to: Position, grid: &Grid<Piece>) -> bool {
    let (rows, columns) = from.delta_to(to);
    (rows == 0 || columns == 0) && path_is_clear(from, to, grid)
}

fn bishop_can_reach(from: Position, to: Position, grid: &Grid<Piece>) -> bool {
    let (rows, columns) = from.delta_to(to);
    rows.abs() == columns.abs() && path_is_clear(from, to, grid)
}

/// Check that every cell strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a row, column or diagonal. False if either end
/// is off the grid.
fn path_is_clear(from: Position, to: Position, grid: &Grid<Piece>) -> bool {
    if !grid.contains(from) || !grid.contains(to) {
        return false;
    }
    let (rows, columns) = from.delta_to(to);
    let (step_row, step_column) = (rows.signum(), columns.signum());

    let mut cursor = from.offset(step_row, step_column);
    while cursor != to {
        if grid.get(cursor).is_some() {
            return false;
        }
        cursor = cursor.offset(step_row, step_column);
    }
    true
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} at {}", self.color, self.kind, self.position)
    }
}
