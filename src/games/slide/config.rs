//! 2048 configuration parameters.

use serde::{Deserialize, Serialize};

use super::board::DEFAULT_TILE_VALUES;

/// 2048 configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideConfig {
    /// Side length of the board.
    pub size: usize,

    /// Score at which the game counts as won.
    pub target_score: u64,

    /// Values a spawned tile is drawn from, uniformly.
    pub tile_values: Vec<u32>,

    /// Tiles spawned before the first move.
    pub starting_tiles: usize,

    /// Random seed for tile spawning.
    /// Same seed produces the same game for the same moves.
    pub seed: u64,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            size: 4,
            target_score: 2048,
            tile_values: DEFAULT_TILE_VALUES.to_vec(),
            starting_tiles: 2,
            seed: 42,
        }
    }
}

impl SlideConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_target_score(mut self, target: u64) -> Self {
        self.target_score = target;
        self
    }

    pub fn with_tile_values(mut self, values: Vec<u32>) -> Self {
        self.tile_values = values;
        self
    }

    pub fn with_starting_tiles(mut self, count: usize) -> Self {
        self.starting_tiles = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
