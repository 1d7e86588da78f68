//! Board configuration.
//!
//! `BoardConfig` describes the track and how many special tiles to place:
//! - `board_size`: number of tiles, start is 1 and finish is `board_size`
//! - `rows` / `cols`: grid shape handed to the layout builder
//! - `ladder_count` / `chute_count`: randomly placed special tiles
//! - `max_generation_attempts`: draw budget for special tile placement
//!
//! Configs can be built in code with the `with_*` methods or loaded from TOML.
//! Missing TOML keys fall back to the classic 10x10 board.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::Position;

/// Classic board size.
pub const DEFAULT_BOARD_SIZE: Position = 100;

/// Classic number of randomly placed ladders.
pub const DEFAULT_LADDER_COUNT: usize = 7;

/// Classic number of randomly placed chutes (the fixed chute is extra).
pub const DEFAULT_CHUTE_COUNT: usize = 8;

/// Default draw budget for special tile placement.
pub const DEFAULT_MAX_GENERATION_ATTEMPTS: u32 = 10_000;

/// Smallest board that can hold the start, finish and fixed chute tiles.
const MIN_BOARD_SIZE: Position = 4;

/// Smallest board that has a valid ladder trigger range `[2, board_size - 4]`.
const MIN_LADDER_BOARD_SIZE: Position = 6;

/// Board shape and special tile counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of tiles on the track (finish tile).
    pub board_size: Position,

    /// Rows in the rendered grid.
    pub rows: u32,

    /// Columns in the rendered grid.
    pub cols: u32,

    /// Randomly placed ladders.
    pub ladder_count: usize,

    /// Randomly placed chutes, not counting the fixed chute on `board_size - 1`.
    pub chute_count: usize,

    /// Total candidate draws allowed before generation gives up.
    pub max_generation_attempts: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            rows: 10,
            cols: 10,
            ladder_count: DEFAULT_LADDER_COUNT,
            chute_count: DEFAULT_CHUTE_COUNT,
            max_generation_attempts: DEFAULT_MAX_GENERATION_ATTEMPTS,
        }
    }
}

impl BoardConfig {
    /// Create the classic 10x10 configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid shape. The board size becomes `rows * cols`, saturating
    /// at `u32::MAX` (which `validate` then rejects).
    #[must_use]
    pub fn with_grid(mut self, rows: u32, cols: u32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self.board_size = rows.saturating_mul(cols);
        self
    }

    /// Set the number of ladders.
    #[must_use]
    pub fn with_ladders(mut self, count: usize) -> Self {
        self.ladder_count = count;
        self
    }

    /// Set the number of random chutes.
    #[must_use]
    pub fn with_chutes(mut self, count: usize) -> Self {
        self.chute_count = count;
        self
    }

    /// Set the generation draw budget.
    #[must_use]
    pub fn with_max_generation_attempts(mut self, attempts: u32) -> Self {
        self.max_generation_attempts = attempts;
        self
    }

    /// Finish tile.
    #[must_use]
    pub fn finish(&self) -> Position {
        self.board_size
    }

    /// Trigger of the fixed chute that always sends players back to start.
    #[must_use]
    pub fn fixed_chute_trigger(&self) -> Position {
        self.board_size - 1
    }

    /// Total entries in a generated mapping, fixed chute included.
    #[must_use]
    pub fn special_tile_count(&self) -> usize {
        self.ladder_count + self.chute_count + 1
    }

    /// Check the board shape alone: minimum size and a grid that covers it.
    ///
    /// Ladder and chute counts are not looked at.
    pub fn validate_board(&self) -> Result<(), EngineError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(EngineError::invalid_configuration(format!(
                "board_size must be at least {MIN_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }

        if self.rows.checked_mul(self.cols) != Some(self.board_size) {
            return Err(EngineError::invalid_configuration(format!(
                "rows * cols ({} * {}) must equal board_size {}",
                self.rows, self.cols, self.board_size
            )));
        }

        Ok(())
    }

    /// Check that the parameters describe a board the generator can fill.
    ///
    /// Each random special tile consumes two distinct interior tiles; the
    /// start, finish and fixed chute trigger are reserved.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.validate_board()?;

        if self.ladder_count > 0 && self.board_size < MIN_LADDER_BOARD_SIZE {
            return Err(EngineError::invalid_configuration(format!(
                "ladders need a board of at least {MIN_LADDER_BOARD_SIZE} tiles"
            )));
        }

        let free_tiles = (self.board_size - 3) as usize;
        let needed = 2 * (self.ladder_count + self.chute_count);
        if needed > free_tiles {
            return Err(EngineError::invalid_configuration(format!(
                "{} ladders and {} chutes need {needed} free tiles, board has {free_tiles}",
                self.ladder_count, self.chute_count
            )));
        }

        if self.max_generation_attempts == 0 {
            return Err(EngineError::invalid_configuration(
                "max_generation_attempts must be positive",
            ));
        }

        Ok(())
    }

    /// Parse and validate a configuration from TOML text.
    ///
    /// ```
    /// use rust_ladders::core::BoardConfig;
    ///
    /// let config = BoardConfig::from_toml_str("ladder_count = 3").unwrap();
    /// assert_eq!(config.ladder_count, 3);
    /// assert_eq!(config.board_size, 100);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, EngineError> {
        let config: Self = toml::from_str(text)
            .map_err(|e| EngineError::invalid_configuration(format!("bad TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
