//! 2048 board: grid, score and the slide-and-merge primitive.
//!
//! Only sliding to the left is implemented directly. Other directions rotate
//! the grid so that the requested direction points left, slide, and rotate
//! back.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument, trace};

use super::direction::Direction;
use crate::core::{Grid, Position, RandomSource};

/// Values a freshly spawned tile may take.
pub const DEFAULT_TILE_VALUES: [u32; 2] = [2, 4];

/// Result of one slide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlideOutcome {
    /// Whether any tile changed cell or value.
    pub moved: bool,
    /// Sum of the tiles created by merges.
    pub points: u64,
}

/// Grid of tiles plus score and playability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideBoard {
    grid: Grid<u32>,
    score: u64,
    is_playable: bool,
}

impl SlideBoard {
    /// An empty, playable board.
    pub fn empty(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            score: 0,
            is_playable: true,
        }
    }

    /// A playable board with the given tiles and zero score.
    pub fn from_rows(rows: Vec<Vec<Option<u32>>>) -> Self {
        Self {
            grid: Grid::from_rows(rows),
            score: 0,
            is_playable: true,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid<u32> {
        &self.grid
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// False once a tile could not be spawned because the board was full.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.is_playable
    }

    /// Largest tile on the board.
    #[must_use]
    pub fn max_tile(&self) -> Option<u32> {
        self.grid.occupied().map(|(_, &value)| value).max()
    }

    /// Check whether the score has reached `target`.
    #[must_use]
    pub fn has_reached(&self, target: u64) -> bool {
        self.score >= target
    }

    /// Check whether some direction would change the board: an empty cell,
    /// or two equal tiles side by side in a row or column.
    #[must_use]
    pub fn has_available_move(&self) -> bool {
        if !self.grid.is_full() {
            return true;
        }
        self.grid.occupied().any(|(position, value)| {
            [position.offset(0, 1), position.offset(1, 0)]
                .into_iter()
                .any(|next| self.grid.get(next) == Some(value))
        })
    }

    /// Stop play if no direction can move. Returns whether play goes on.
    pub fn end_if_stuck(&mut self) -> bool {
        if self.is_playable && !self.has_available_move() {
            debug!(score = self.score, "no move left");
            self.is_playable = false;
        }
        self.is_playable
    }

    /// Spawn a 2 or a 4 on a random empty cell.
    ///
    /// On a full board nothing is placed and the board stops being playable.
    pub fn generate_tile<R: RandomSource>(&mut self, rng: &mut R) -> Option<Position> {
        self.spawn_tile(rng, &DEFAULT_TILE_VALUES)
    }

    /// Spawn a tile drawn uniformly from `values` on a random empty cell.
    #[instrument(level = "debug", skip(self, rng))]
    pub fn spawn_tile<R: RandomSource>(&mut self, rng: &mut R, values: &[u32]) -> Option<Position> {
        let empty = self.grid.empty_positions();
        let Some(&position) = rng.choose(empty.as_slice()) else {
            debug!("board full, no tile spawned");
            self.is_playable = false;
            return None;
        };
        let &value = rng.choose(values)?;

        self.grid.place(position, value);
        debug!(%position, value, "spawned tile");
        Some(position)
    }

    /// Slide every tile in `direction`, merging equal neighbours.
    #[instrument(level = "debug", skip(self), fields(score = self.score))]
    pub fn play_move(&mut self, direction: Direction) -> SlideOutcome {
        self.grid
            .rotate_clockwise_times(direction.clockwise_turns_to_left());
        let outcome = self.slide_left();
        self.grid.rotate_clockwise_times(direction.clockwise_turns_back());

        debug!(moved = outcome.moved, points = outcome.points, "slide applied");
        outcome
    }

    /// Slide every row to the left and add merged values to the score.
    pub fn slide_left(&mut self) -> SlideOutcome {
        let mut total = SlideOutcome::default();

        for row in 0..self.grid.size() {
            let outcome = slide_row_left(self.grid.row_mut(row));
            trace!(row, moved = outcome.moved, points = outcome.points, "row slid");
            total.moved |= outcome.moved;
            total.points += outcome.points;
        }

        self.score += total.points;
        total
    }
}

/// Compact one row to the left, merging equal pairs left-first.
///
/// `frontier` is the next free slot. `mergeable` is the slot of the last tile
/// placed, cleared after a merge so a merged tile cannot merge again.
fn slide_row_left(row: &mut [Option<u32>]) -> SlideOutcome {
    let before: SmallVec<[Option<u32>; 8]> = SmallVec::from_slice(row);
    let mut frontier = 0;
    let mut mergeable: Option<usize> = None;
    let mut points = 0u64;

    for column in 0..row.len() {
        let Some(value) = row[column].take() else {
            continue;
        };

        if let Some(slot) = mergeable {
            if row[slot] == Some(value) {
                let merged = value * 2;
                row[slot] = Some(merged);
                points += u64::from(merged);
                mergeable = None;
                continue;
            }
        }

        row[frontier] = Some(value);
        mergeable = Some(frontier);
        frontier += 1;
    }

    SlideOutcome {
        moved: before.as_slice() != &row[..],
        points,
    }
}

impl std::fmt::Display for SlideBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.max_tile().map_or(1, |v| v.to_string().len()).max(4);
        writeln!(f, "score: {}", self.score)?;
        for row in self.grid.rows() {
            for cell in row {
                match cell {
                    Some(value) => write!(f, "[{value:>width$}]")?,
                    None => write!(f, "[{:>width$}]", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[u32]) -> Vec<Option<u32>> {
        values.iter().map(|&v| (v != 0).then_some(v)).collect()
    }

    fn slide(values: &[u32]) -> (Vec<Option<u32>>, SlideOutcome) {
        let mut cells = row(values);
        let outcome = slide_row_left(&mut cells);
        (cells, outcome)
    }

    /// Always picks the first option.
    struct FirstPick;

    impl RandomSource for FirstPick {
        fn pick(&mut self, _len: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_single_merge() {
        let (cells, outcome) = slide(&[2, 2, 4, 0]);
        assert_eq!(cells, row(&[4, 4, 0, 0]));
        assert_eq!(outcome.points, 4);
        assert!(outcome.moved);
    }

    #[test]
    fn test_chain_merges_left_first() {
        let (cells, outcome) = slide(&[2, 2, 2, 0]);
        assert_eq!(cells, row(&[4, 2, 0, 0]));
        assert_eq!(outcome.points, 4);
    }

    #[test]
    fn test_two_pairs() {
        let (cells, outcome) = slide(&[2, 2, 2, 2]);
        assert_eq!(cells, row(&[4, 4, 0, 0]));
        assert_eq!(outcome.points, 8);
    }

    #[test]
    fn test_merged_tile_does_not_merge_again() {
        let (cells, outcome) = slide(&[4, 2, 2, 0]);
        assert_eq!(cells, row(&[4, 4, 0, 0]));
        assert_eq!(outcome.points, 4);
    }

    #[test]
    fn test_compaction_across_gaps() {
        let (cells, outcome) = slide(&[0, 2, 0, 2]);
        assert_eq!(cells, row(&[4, 0, 0, 0]));
        assert_eq!(outcome.points, 4);

        let (cells, outcome) = slide(&[0, 0, 8, 0]);
        assert_eq!(cells, row(&[8, 0, 0, 0]));
        assert_eq!(outcome.points, 0);
        assert!(outcome.moved);
    }

    #[test]
    fn test_no_change() {
        let (cells, outcome) = slide(&[2, 4, 8, 16]);
        assert_eq!(cells, row(&[2, 4, 8, 16]));
        assert_eq!(outcome, SlideOutcome::default());
    }

    #[test]
    fn test_play_move_updates_score() {
        let mut board = SlideBoard::from_rows(vec![
            row(&[2, 2, 4, 0]),
            row(&[0, 0, 0, 0]),
            row(&[0, 0, 0, 0]),
            row(&[0, 0, 0, 0]),
        ]);

        let outcome = board.play_move(Direction::Left);
        assert_eq!(outcome.points, 4);
        assert_eq!(board.score(), 4);
        assert_eq!(board.grid().row(0), row(&[4, 4, 0, 0]).as_slice());
    }

    #[test]
    fn test_generate_tile_on_empty_board() {
        let mut board = SlideBoard::empty(4);

        let placed = board.generate_tile(&mut FirstPick);
        assert_eq!(placed, Some(Position::ORIGIN));
        assert_eq!(board.grid().get(Position::ORIGIN), Some(&2));
        assert!(board.is_playable());
    }

    #[test]
    fn test_generate_tile_on_full_board() {
        let full: Vec<_> = (0..4).map(|_| row(&[2, 4, 2, 4])).collect();
        let mut board = SlideBoard::from_rows(full);
        let before = board.grid().clone();

        assert_eq!(board.generate_tile(&mut FirstPick), None);
        assert!(!board.is_playable());
        assert_eq!(board.grid(), &before);
    }

    #[test]
    fn test_spawn_with_no_values_places_nothing() {
        let mut board = SlideBoard::empty(2);
        assert_eq!(board.spawn_tile(&mut FirstPick, &[]), None);
        assert_eq!(board.grid().occupied().count(), 0);
        assert!(board.is_playable());
    }

    #[test]
    fn test_available_move_on_full_board() {
        let open = SlideBoard::from_rows(vec![row(&[2, 2]), row(&[4, 8])]);
        assert!(open.has_available_move());

        let vertical = SlideBoard::from_rows(vec![row(&[2, 4]), row(&[2, 8])]);
        assert!(vertical.has_available_move());

        let mut locked = SlideBoard::from_rows(vec![row(&[2, 4]), row(&[4, 2])]);
        assert!(!locked.has_available_move());
        assert!(!locked.end_if_stuck());
        assert!(!locked.is_playable());
    }

    #[test]
    fn test_gap_is_an_available_move() {
        let mut board = SlideBoard::from_rows(vec![row(&[2, 4]), row(&[8, 0])]);
        assert!(board.has_available_move());
        assert!(board.end_if_stuck());
    }

    #[test]
    fn test_max_tile_and_target() {
        let mut board = SlideBoard::from_rows(vec![row(&[8, 8]), row(&[0, 2])]);
        assert_eq!(board.max_tile(), Some(8));

        board.play_move(Direction::Left);
        assert_eq!(board.max_tile(), Some(16));
        assert!(board.has_reached(16));
        assert!(!board.has_reached(17));
    }

    #[test]
    fn test_display() {
        let board = SlideBoard::from_rows(vec![row(&[2, 0]), row(&[0, 2048])]);
        let text = board.to_string();
        assert!(text.starts_with("score: 0\n"));
        assert!(text.contains("[2048]"));
        assert!(text.contains("[   .]"));
    }
}
