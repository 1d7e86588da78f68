//! Per-tile descriptors for whatever draws the board.
//!
//! Descriptors run from the finish down to the start, which is the order a
//! top-to-bottom grid renderer consumes them in. Flipping alternate rows
//! into a serpentine is left to the renderer.

use serde::{Deserialize, Serialize};

use super::special::{SpecialTile, SpecialTiles};
use crate::core::Position;

/// One board tile and the special tile on it, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDescriptor {
    /// Tile number.
    pub position: Position,
    /// Ladder or chute starting on this tile.
    pub special: Option<SpecialTile>,
}

/// Describe every tile of a `rows` x `cols` board, highest number first.
///
/// A grid whose tile count overflows `u32` has no valid board and yields an
/// empty layout.
///
/// ```
/// use rust_ladders::board::{build_layout, SpecialTile, SpecialTiles};
///
/// let tiles: SpecialTiles = [(99, SpecialTile::chute(1))].into_iter().collect();
/// let layout = build_layout(&tiles, 10, 10);
///
/// assert_eq!(layout.len(), 100);
/// assert_eq!(layout[0].position, 100);
/// assert_eq!(layout[1].special, Some(SpecialTile::chute(1)));
/// ```
#[must_use]
pub fn build_layout(tiles: &SpecialTiles, rows: u32, cols: u32) -> Vec<TileDescriptor> {
    let total = rows.checked_mul(cols).unwrap_or(0);
    (1..=total)
        .rev()
        .map(|position| TileDescriptor {
            position,
            special: tiles.get(position).copied(),
        })
        .collect()
}
