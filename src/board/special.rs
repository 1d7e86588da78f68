//! Special tiles: ladders and chutes.
//!
//! A `SpecialTile` sits on a trigger position and moves a player who lands
//! there to its target. `SpecialTiles` is the per-game mapping from trigger
//! position to tile.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Position, START_POSITION};

/// Direction of a special tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialKind {
    /// Moves the player up the board.
    Ladder,
    /// Moves the player down the board.
    Chute,
}

impl SpecialKind {
    /// Name used by the space-themed board: ladders are shooting stars and
    /// chutes are black holes.
    #[must_use]
    pub const fn theme_name(self) -> &'static str {
        match self {
            SpecialKind::Ladder => "Shooting Star",
            SpecialKind::Chute => "Black Hole",
        }
    }
}

impl std::fmt::Display for SpecialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecialKind::Ladder => write!(f, "ladder"),
            SpecialKind::Chute => write!(f, "chute"),
        }
    }
}

/// A ladder or chute and where it sends the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecialTile {
    /// Ladder or chute.
    pub kind: SpecialKind,
    /// Destination position.
    pub target: Position,
}

impl SpecialTile {
    /// A ladder up to `target`.
    #[must_use]
    pub const fn ladder(target: Position) -> Self {
        Self {
            kind: SpecialKind::Ladder,
            target,
        }
    }

    /// A chute down to `target`.
    #[must_use]
    pub const fn chute(target: Position) -> Self {
        Self {
            kind: SpecialKind::Chute,
            target,
        }
    }

    /// Check if this tile moves the player up.
    #[must_use]
    pub const fn is_ladder(&self) -> bool {
        matches!(self.kind, SpecialKind::Ladder)
    }

    /// Check if this tile moves the player down.
    #[must_use]
    pub const fn is_chute(&self) -> bool {
        matches!(self.kind, SpecialKind::Chute)
    }
}

impl std::fmt::Display for SpecialTile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            SpecialKind::Ladder => write!(f, "{}! Up to {}", self.kind.theme_name(), self.target),
            SpecialKind::Chute => write!(f, "{}! Down to {}", self.kind.theme_name(), self.target),
        }
    }
}

/// Mapping from trigger position to special tile.
///
/// Built once per game by the generator (or by hand for fixed boards and
/// tests) and only read afterwards.
///
/// ## Example
///
/// ```
/// use rust_ladders::board::{SpecialTile, SpecialTiles};
///
/// let tiles: SpecialTiles = [(5, SpecialTile::ladder(15)), (99, SpecialTile::chute(1))]
///     .into_iter()
///     .collect();
///
/// assert_eq!(tiles.target(5), Some(15));
/// assert_eq!(tiles.target(10), None);
/// assert!(tiles.validate(100).is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTiles {
    tiles: FxHashMap<Position, SpecialTile>,
}

impl SpecialTiles {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a tile on `trigger`, returning the tile it replaced, if any.
    pub fn insert(&mut self, trigger: Position, tile: SpecialTile) -> Option<SpecialTile> {
        self.tiles.insert(trigger, tile)
    }

    /// Look up the tile on a position.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&SpecialTile> {
        self.tiles.get(&position)
    }

    /// Where a player landing on `position` is sent, if anywhere.
    #[must_use]
    pub fn target(&self, position: Position) -> Option<Position> {
        self.tiles.get(&position).map(|tile| tile.target)
    }

    /// Check if `position` holds a special tile.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.tiles.contains_key(&position)
    }

    /// Number of special tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if there are no special tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over (trigger, tile) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &SpecialTile)> {
        self.tiles.iter().map(|(&pos, tile)| (pos, tile))
    }

    /// All (trigger, tile) pairs ordered by trigger position.
    #[must_use]
    pub fn sorted(&self) -> Vec<(Position, SpecialTile)> {
        let mut entries: Vec<_> = self.tiles.iter().map(|(&pos, &tile)| (pos, tile)).collect();
        entries.sort_unstable_by_key(|&(pos, _)| pos);
        entries
    }

    /// Number of tiles of the given kind.
    #[must_use]
    pub fn count(&self, kind: SpecialKind) -> usize {
        self.tiles.values().filter(|tile| tile.kind == kind).count()
    }

    /// Check the mapping against the board rules for a board of `board_size`.
    ///
    /// - no tile on the start or finish
    /// - every target on the board and different from its trigger
    /// - ladders go up, chutes go down
    /// - no two tiles share a target
    pub fn validate(&self, board_size: Position) -> Result<(), EngineError> {
        let mut targets = FxHashSet::default();

        for (trigger, tile) in self.sorted() {
            if trigger <= START_POSITION || trigger >= board_size {
                return Err(EngineError::invalid_configuration(format!(
                    "special tile on {trigger}: triggers must lie strictly between \
                     {START_POSITION} and {board_size}"
                )));
            }

            if tile.target < START_POSITION || tile.target > board_size {
                return Err(EngineError::invalid_configuration(format!(
                    "{} on {trigger} targets {} which is off the board",
                    tile.kind, tile.target
                )));
            }

            let direction_ok = match tile.kind {
                SpecialKind::Ladder => tile.target > trigger,
                SpecialKind::Chute => tile.target < trigger,
            };
            if !direction_ok {
                return Err(EngineError::invalid_configuration(format!(
                    "{} on {trigger} points the wrong way (target {})",
                    tile.kind, tile.target
                )));
            }

            if !targets.insert(tile.target) {
                return Err(EngineError::invalid_configuration(format!(
                    "more than one special tile targets {}",
                    tile.target
                )));
            }
        }

        Ok(())
    }
}

impl FromIterator<(Position, SpecialTile)> for SpecialTiles {
    fn from_iter<I: IntoIterator<Item = (Position, SpecialTile)>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}
