//! The board: special tiles, their random placement, and tile descriptors.
//!
//! - `special`: `SpecialTile` and the per-game `SpecialTiles` mapping
//! - `generator`: randomized, bounded placement of ladders and chutes
//! - `layout`: finish-to-start tile descriptors for renderers

pub mod generator;
pub mod layout;
pub mod special;

pub use generator::generate_special_tiles;
pub use layout::{build_layout, TileDescriptor};
pub use special::{SpecialKind, SpecialTile, SpecialTiles};
