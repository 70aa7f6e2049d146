//! 2048 game session: board, seeded RNG and config.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::board::{SlideBoard, SlideOutcome};
use super::config::SlideConfig;
use super::direction::Direction;
use crate::core::{GameRng, GameRngState};
use crate::error::EngineError;

/// A running 2048 game.
#[derive(Clone, Debug)]
pub struct SlideGame {
    config: SlideConfig,
    board: SlideBoard,
    rng: GameRng,
}

impl SlideGame {
    /// Start a game and spawn the configured starting tiles.
    ///
    /// A board that starts with no possible move is over at once.
    pub fn new(config: SlideConfig) -> Self {
        assert!(!config.tile_values.is_empty(), "Need at least one tile value");

        let mut rng = GameRng::new(config.seed);
        let mut board = SlideBoard::empty(config.size);
        for _ in 0..config.starting_tiles {
            board.spawn_tile(&mut rng, &config.tile_values);
        }
        board.end_if_stuck();

        Self { config, board, rng }
    }

    #[must_use]
    pub fn board(&self) -> &SlideBoard {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    /// Play one turn: slide, and spawn a tile if anything moved.
    ///
    /// A direction that moves nothing leaves the board and the RNG as they
    /// were. The game is over once no direction can move.
    #[instrument(level = "debug", skip(self))]
    pub fn step(&mut self, direction: Direction) -> SlideOutcome {
        if !self.board.is_playable() {
            return SlideOutcome::default();
        }

        let outcome = self.board.play_move(direction);
        if outcome.moved {
            self.board.spawn_tile(&mut self.rng, &self.config.tile_values);
        }
        self.board.end_if_stuck();
        outcome
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.has_reached(self.config.target_score)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won() || !self.board.is_playable()
    }

    /// Capture everything needed to resume this game.
    #[must_use]
    pub fn snapshot(&self) -> SlideSnapshot {
        SlideSnapshot {
            config: self.config.clone(),
            board: self.board.clone(),
            rng: self.rng.state(),
        }
    }

    /// Resume a game; the tile sequence continues where it left off.
    pub fn restore(snapshot: SlideSnapshot) -> Self {
        debug!(score = snapshot.board.score(), "restoring game");
        Self {
            rng: GameRng::from_state(&snapshot.rng),
            config: snapshot.config,
            board: snapshot.board,
        }
    }
}

/// Serializable 2048 game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSnapshot {
    pub config: SlideConfig,
    pub board: SlideBoard,
    pub rng: GameRngState,
}

impl SlideSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode with bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
