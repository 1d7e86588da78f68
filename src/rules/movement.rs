//! Movement and win rules.
//!
//! Pure functions: a move is the roll added to the position, capped at the
//! finish, followed by at most one special tile jump. Landing on a target
//! never triggers another tile.

use super::dice::is_valid_roll;
use crate::board::SpecialTiles;
use crate::core::{EngineError, Position, START_POSITION};
use crate::core::config::DEFAULT_BOARD_SIZE;

/// Move `roll` tiles forward, stopping on the finish instead of overshooting.
#[must_use]
pub fn clamp_move(position: Position, roll: u32, board_size: Position) -> Position {
    position.saturating_add(roll).min(board_size)
}

/// Apply the special tile on `position`, if there is one.
#[must_use]
pub fn resolve_special(position: Position, tiles: &SpecialTiles) -> Position {
    match tiles.target(position) {
        Some(target) => target,
        None => position,
    }
}

/// Resolve a full move: clamp, then jump along any ladder or chute.
///
/// Rolls must be faces of the die and positions must be on the board.
///
/// ```
/// use rust_ladders::board::{SpecialTile, SpecialTiles};
/// use rust_ladders::rules::advance;
///
/// let tiles: SpecialTiles = [(5, SpecialTile::ladder(15))].into_iter().collect();
///
/// assert_eq!(advance(1, 4, &tiles, 100).unwrap(), 15);
/// assert_eq!(advance(98, 3, &tiles, 100).unwrap(), 100);
/// assert!(advance(1, 7, &tiles, 100).is_err());
/// ```
pub fn advance(
    position: Position,
    roll: u32,
    tiles: &SpecialTiles,
    board_size: Position,
) -> Result<Position, EngineError> {
    if !is_valid_roll(roll) {
        return Err(EngineError::InvalidRoll { roll });
    }
    check_position(position, board_size)?;

    let landed = clamp_move(position, roll, board_size);
    Ok(resolve_special(landed, tiles))
}

/// Check if `position` is the finish tile.
#[must_use]
pub const fn is_win(position: Position, board_size: Position) -> bool {
    position == board_size
}

/// [`is_win`] on the classic 100-tile board.
#[must_use]
pub const fn is_win_default(position: Position) -> bool {
    is_win(position, DEFAULT_BOARD_SIZE)
}

/// Check that `position` is a tile on a board of `board_size`.
pub fn check_position(position: Position, board_size: Position) -> Result<(), EngineError> {
    if (START_POSITION..=board_size).contains(&position) {
        Ok(())
    } else {
        Err(EngineError::InvalidPosition {
            position,
            board_size,
        })
    }
}
