//! Game sessions.
//!
//! A `Game` ties the rules together for one play-through:
//! - special tiles are generated once when the game is built
//! - players take turns in seat order, starting from tile 1
//! - each turn rolls, moves, applies any ladder or chute, and checks for a win
//! - the first player to reach the finish ends the game
//!
//! Supports 1-8 players.

mod session;

pub use session::{Game, GameBuilder, PlayerState, TurnResult, MAX_PLAYERS};
