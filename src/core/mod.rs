//! Core engine types: positions, players, RNG, configuration, errors.
//!
//! Everything else in the crate is built on these.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::BoardConfig;
pub use error::EngineError;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;

/// A tile number on the track. Start is 1, finish is the board size.
pub type Position = u32;

/// Every player begins on this tile.
pub const START_POSITION: Position = 1;
