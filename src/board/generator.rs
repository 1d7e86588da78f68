//! Random special tile placement.
//!
//! Placement is rejection sampling over a shared set of used positions:
//! a candidate (trigger, target) pair is accepted only when neither tile is
//! already part of another special tile. Start, finish and the fixed chute
//! trigger are reserved up front. Every draw counts against
//! `BoardConfig::max_generation_attempts`.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::special::{SpecialTile, SpecialTiles};
use crate::core::{BoardConfig, EngineError, GameRng, Position, START_POSITION};

/// Generate the special tiles for one game.
///
/// Produces `ladder_count` ladders, `chute_count` chutes and the fixed chute
/// from `board_size - 1` back to the start. Triggers and targets never
/// overlap each other except for the fixed chute's target, the start tile.
///
/// ```
/// use rust_ladders::board::generate_special_tiles;
/// use rust_ladders::core::{BoardConfig, GameRng};
///
/// let config = BoardConfig::default();
/// let tiles = generate_special_tiles(&config, &mut GameRng::new(42)).unwrap();
///
/// assert_eq!(tiles.len(), 16);
/// assert_eq!(tiles.target(99), Some(1));
/// ```
pub fn generate_special_tiles(
    config: &BoardConfig,
    rng: &mut GameRng,
) -> Result<SpecialTiles, EngineError> {
    config.validate()?;

    let board_size = config.board_size;
    let fixed_trigger = config.fixed_chute_trigger();

    let mut placer = Placer {
        used: [START_POSITION, board_size, fixed_trigger].into_iter().collect(),
        tiles: SpecialTiles::new(),
        attempts: 0,
        max_attempts: config.max_generation_attempts,
        ladders_placed: 0,
        chutes_placed: 0,
    };

    while placer.ladders_placed < config.ladder_count {
        placer.spend_attempt()?;

        let trigger = rng.gen_inclusive(2, board_size - 4);
        let target = rng.gen_inclusive(trigger + 1, board_size - 2);

        if placer.try_place(trigger, SpecialTile::ladder(target)) {
            placer.ladders_placed += 1;
        }
    }

    while placer.chutes_placed < config.chute_count {
        placer.spend_attempt()?;

        let trigger = rng.gen_inclusive(2, board_size - 1);
        let target = rng.gen_inclusive(START_POSITION, trigger - 1);

        if target > START_POSITION && placer.try_place(trigger, SpecialTile::chute(target)) {
            placer.chutes_placed += 1;
        }
    }

    placer
        .tiles
        .insert(fixed_trigger, SpecialTile::chute(START_POSITION));

    debug!(
        ladders = placer.ladders_placed,
        chutes = placer.chutes_placed,
        attempts = placer.attempts,
        "special tiles generated"
    );

    Ok(placer.tiles)
}

/// Bookkeeping for one generation run.
struct Placer {
    used: FxHashSet<Position>,
    tiles: SpecialTiles,
    attempts: u32,
    max_attempts: u32,
    ladders_placed: usize,
    chutes_placed: usize,
}

impl Placer {
    fn spend_attempt(&mut self) -> Result<(), EngineError> {
        if self.attempts >= self.max_attempts {
            return Err(EngineError::GenerationFailed {
                attempts: self.attempts,
                ladders_placed: self.ladders_placed,
                chutes_placed: self.chutes_placed,
            });
        }
        self.attempts += 1;
        Ok(())
    }

    /// Place the tile if neither end is taken.
    fn try_place(&mut self, trigger: Position, tile: SpecialTile) -> bool {
        if self.used.contains(&trigger) || self.used.contains(&tile.target) {
            return false;
        }

        self.used.insert(trigger);
        self.used.insert(tile.target);
        self.tiles.insert(trigger, tile);
        trace!(trigger, target = tile.target, kind = %tile.kind, "placed special tile");
        true
    }
}
