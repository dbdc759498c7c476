//! Game configuration.
//!
//! Defaults describe the classic game: a 4x4 board played to 2048.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{GameError, GameResult};

/// Default number of cells along each side of the board
pub const DEFAULT_DIMENSION: usize = 4;

/// Default tile value that wins the game
pub const DEFAULT_THRESHOLD: u32 = 2048;

/// Default bound on queued move requests
pub const DEFAULT_MAX_PENDING_MOVES: usize = 100;

/// Default pause after a move that changed the board, in milliseconds
pub const DEFAULT_DRAIN_DELAY_MS: u64 = 300;

/// Settings for one game. Missing fields take their defaults when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// number of cells along each side of the board, at least 2
    pub dimension: usize,
    /// the game is won once any tile reaches this value
    pub threshold: u32,
    /// move requests beyond this many pending ones are dropped
    pub max_pending_moves: usize,
    /// how long the queue rests after a move that changed the board
    pub drain_delay_ms: u64,
    /// how many tiles a new game starts with
    pub opening_tiles: usize,
    /// the value of each opening tile
    pub opening_value: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            dimension: DEFAULT_DIMENSION,
            threshold: DEFAULT_THRESHOLD,
            max_pending_moves: DEFAULT_MAX_PENDING_MOVES,
            drain_delay_ms: DEFAULT_DRAIN_DELAY_MS,
            opening_tiles: 2,
            opening_value: 2,
        }
    }
}

impl GameConfig {
    /// a default config for a board of the given size and win threshold
    pub fn new(dimension: usize, threshold: u32) -> Self {
        GameConfig {
            dimension,
            threshold,
            ..Default::default()
        }
    }

    /// parses a config from json
    ///
    /// ```
    /// # use slide_merge_rules::GameConfig;
    /// let config = GameConfig::from_json(r#"{"dimension": 5, "threshold": 4096}"#).unwrap();
    /// assert_eq!(config.dimension, 5);
    /// assert_eq!(config.max_pending_moves, 100);
    /// ```
    pub fn from_json(json: &str) -> GameResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// checks that the settings describe a playable game
    pub fn validate(&self) -> GameResult<()> {
        if self.dimension < 2 {
            return Err(GameError::InvalidConfig(format!(
                "dimension must be at least 2, got {}",
                self.dimension
            )));
        }
        if self.threshold == 0 {
            return Err(GameError::InvalidConfig(
                "threshold must be positive".to_string(),
            ));
        }
        if self.opening_value == 0 {
            return Err(GameError::InvalidConfig(
                "opening tiles must be positive".to_string(),
            ));
        }
        if self.opening_tiles > self.dimension * self.dimension {
            return Err(GameError::InvalidConfig(format!(
                "{} opening tiles do not fit on a {}x{} board",
                self.opening_tiles, self.dimension, self.dimension
            )));
        }
        Ok(())
    }

    /// the drain delay as a duration
    pub fn drain_delay(&self) -> Duration {
        Duration::from_millis(self.drain_delay_ms)
    }
}
