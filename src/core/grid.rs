//! Fixed-size square grid of optional cells.
//!
//! Every engine in this crate stores its board in a `Grid<T>`: an N×N array
//! of `Option<T>` where `None` is an empty cell. N is chosen at construction
//! and never changes.
//!
//! ## Rotation
//!
//! `rotate_clockwise` turns the grid a quarter turn in place by swapping the
//! cells of each concentric layer in 4-cycles. Four quarter turns are the
//! identity and `rotate_counter_clockwise` is its exact inverse.
//!
//! ```
//! use grid_games::core::{Grid, Position};
//!
//! let mut grid: Grid<u32> = Grid::new(3);
//! grid.place(Position::new(0, 0), 7);
//!
//! grid.rotate_clockwise();
//! assert_eq!(grid.get(Position::new(0, 2)), Some(&7));
//!
//! grid.rotate_counter_clockwise();
//! assert_eq!(grid.get(Position::new(0, 0)), Some(&7));
//! ```

use serde::{Deserialize, Serialize};

use super::position::Position;

/// N×N grid of optional cell values, stored row-major.
///
/// Deserializing checks the shape: a zero size or a cell count other than
/// `size * size` is a decode error.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridRepr<T>")]
pub struct Grid<T> {
    size: usize,
    cells: Vec<Option<T>>,
}

/// Unchecked wire form of `Grid`.
#[derive(Deserialize)]
struct GridRepr<T> {
    size: usize,
    cells: Vec<Option<T>>,
}

impl<T> TryFrom<GridRepr<T>> for Grid<T> {
    type Error = String;

    fn try_from(repr: GridRepr<T>) -> Result<Self, Self::Error> {
        if repr.size == 0 {
            return Err("grid size must be at least 1".to_string());
        }
        let expected = repr.size.checked_mul(repr.size);
        if expected != Some(repr.cells.len()) {
            return Err(format!(
                "a {}x{} grid needs {} cells, got {}",
                repr.size,
                repr.size,
                repr.size.saturating_mul(repr.size),
                repr.cells.len()
            ));
        }
        Ok(Self {
            size: repr.size,
            cells: repr.cells,
        })
    }
}

impl<T> Grid<T> {
    /// Create an empty `size`×`size` grid.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Grid must have at least one cell");

        Self {
            size,
            cells: (0..size * size).map(|_| None).collect(),
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// Panics unless `rows` is square.
    pub fn from_rows(rows: Vec<Vec<Option<T>>>) -> Self {
        let size = rows.len();
        assert!(size > 0, "Grid must have at least one cell");
        assert!(
            rows.iter().all(|row| row.len() == size),
            "Grid rows must all have length {}",
            size
        );

        Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether `position` addresses a cell of this grid.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        let size = self.size as i64;
        let (row, column) = (i64::from(position.row), i64::from(position.column));
        (0..size).contains(&row) && (0..size).contains(&column)
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.row as usize * self.size + position.column as usize)
    }

    /// Cell contents, or `None` if the cell is empty or off the grid.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&T> {
        self.index_of(position).and_then(|i| self.cells[i].as_ref())
    }

    /// Write `value` into a cell, returning whatever it displaced.
    ///
    /// Panics if `position` is off the grid; callers bounds-check first.
    pub fn place(&mut self, position: Position, value: T) -> Option<T> {
        let Some(index) = self.index_of(position) else {
            panic!("{} is outside the {}x{} grid", position, self.size, self.size);
        };
        self.cells[index].replace(value)
    }

    /// Empty a cell, returning its previous contents.
    pub fn take(&mut self, position: Position) -> Option<T> {
        self.index_of(position).and_then(|i| self.cells[i].take())
    }

    /// Check whether an on-grid cell is empty. Off-grid positions are not.
    #[must_use]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.index_of(position)
            .is_some_and(|i| self.cells[i].is_none())
    }

    /// All empty cells in row-major order.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| self.position_of(i))
            .collect()
    }

    /// Check whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterate over occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, &T)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.as_ref().map(|value| (self.position_of(i), value)))
    }

    /// Borrow one row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Option<T>] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Mutably borrow one row.
    pub fn row_mut(&mut self, row: usize) -> &mut [Option<T>] {
        &mut self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<T>]> {
        self.cells.chunks(self.size)
    }

    /// Rotate a quarter turn clockwise, in place.
    pub fn rotate_clockwise(&mut self) {
        let n = self.size;
        let at = |row: usize, column: usize| row * n + column;

        for layer in 0..n / 2 {
            let first = layer;
            let last = n - 1 - layer;

            for i in first..last {
                let offset = i - first;
                let top = at(first, i);
                let left = at(last - offset, first);
                let bottom = at(last, last - offset);
                let right = at(i, last);

                // top <- left <- bottom <- right <- top
                self.cells.swap(top, left);
                self.cells.swap(left, bottom);
                self.cells.swap(bottom, right);
            }
        }
    }

    /// Rotate a quarter turn counter-clockwise, in place.
    pub fn rotate_counter_clockwise(&mut self) {
        self.rotate_clockwise_times(3);
    }

    /// Rotate `turns` quarter turns clockwise. Only `turns % 4` matters.
    pub fn rotate_clockwise_times(&mut self, turns: usize) {
        for _ in 0..turns % 4 {
            self.rotate_clockwise();
        }
    }

    fn position_of(&self, index: usize) -> Position {
        Position::new((index / self.size) as i32, (index % self.size) as i32)
    }
}
