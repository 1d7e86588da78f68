//! # rust-ladders
//!
//! A rules engine for Snakes and Ladders.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Dice, movement and win checks are free functions over
//!    plain values. Only the game session holds state.
//!
//! 2. **Explicit Sessions**: Each `Game` owns its special tiles and player
//!    positions. Nothing is shared between games.
//!
//! 3. **Bounded Generation**: Special tile placement has a fixed draw budget
//!    and reports failure instead of looping forever.
//!
//! 4. **Deterministic**: A seed fixes both the board and every dice roll.
//!
//! ## Modules
//!
//! - `core`: Positions, players, RNG, configuration, errors
//! - `board`: Special tiles, their generator, and the tile layout
//! - `rules`: Dice, movement and win detection
//! - `game`: Turn-by-turn game sessions
//! - `python`: PyO3 bindings (feature `python`)

pub mod board;
pub mod core;
pub mod game;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{BoardConfig, EngineError, GameRng, PlayerId, PlayerMap, Position, START_POSITION};

pub use crate::board::{
    build_layout, generate_special_tiles, SpecialKind, SpecialTile, SpecialTiles, TileDescriptor,
};

pub use crate::rules::{advance, clamp_move, is_win, resolve_special, roll_dice, DICE_SIDES};

pub use crate::game::{Game, GameBuilder, PlayerState, TurnResult};
