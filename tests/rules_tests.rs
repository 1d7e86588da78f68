//! Dice, movement and win rule tests.
//!
//! These pin down the rule contracts the game session builds on.

use proptest::prelude::*;

use rust_ladders::core::GameRng;
use rust_ladders::rules::{advance, clamp_move, is_win, is_win_default, resolve_special, roll_dice};
use rust_ladders::{EngineError, SpecialTile, SpecialTiles};

// =============================================================================
// Dice
// =============================================================================

/// 100,000 rolls stay on the die and land on each face about 1/6 of the time.
#[test]
fn test_dice_range_and_distribution() {
    const ROLLS: usize = 100_000;
    let mut rng = GameRng::new(2024);
    let mut counts = [0usize; 6];

    for _ in 0..ROLLS {
        let roll = roll_dice(&mut rng);
        assert!((1..=6).contains(&roll), "roll was {roll}");
        counts[(roll - 1) as usize] += 1;
    }

    let expected = ROLLS as f64 / 6.0;
    for (face, &count) in counts.iter().enumerate() {
        let deviation = (count as f64 - expected).abs() / expected;
        assert!(
            deviation < 0.05,
            "face {} came up {count} times, expected about {expected:.0}",
            face + 1
        );
    }
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn test_advance_moves_by_roll() {
    let empty = SpecialTiles::new();
    for (start, roll, expected) in [(1, 3, 4), (98, 3, 100), (99, 1, 100), (100, 6, 100)] {
        assert_eq!(
            advance(start, roll, &empty, 100).unwrap(),
            expected,
            "advance({start}, {roll})"
        );
    }
}

/// Every start and roll on an empty board is min(start + roll, 100).
#[test]
fn test_advance_exhaustive_empty_board() {
    let empty = SpecialTiles::new();
    for start in 1..=100 {
        for roll in 1..=6 {
            let result = advance(start, roll, &empty, 100).unwrap();
            assert_eq!(result, (start + roll).min(100));
            assert!(result <= 100);
        }
    }
}

#[test]
fn test_overshoot_stops_on_finish() {
    assert_eq!(clamp_move(98, 5, 100), 100);
    assert_eq!(advance(98, 5, &SpecialTiles::new(), 100).unwrap(), 100);
}

#[test]
fn test_ladder_and_plain_tile() {
    let tiles: SpecialTiles = [(5, SpecialTile::ladder(15))].into_iter().collect();
    assert_eq!(resolve_special(5, &tiles), 15);
    assert_eq!(resolve_special(10, &tiles), 10);
}

#[test]
fn test_chute() {
    let tiles: SpecialTiles = [(25, SpecialTile::chute(3))].into_iter().collect();
    assert_eq!(resolve_special(25, &tiles), 3);
    assert_eq!(advance(21, 4, &tiles, 100).unwrap(), 3);
}

#[test]
fn test_fixed_chute_back_to_start() {
    let tiles: SpecialTiles = [(99, SpecialTile::chute(1))].into_iter().collect();
    assert_eq!(resolve_special(99, &tiles), 1);
}

#[test]
fn test_other_tile_untouched() {
    let tiles: SpecialTiles = [(8, SpecialTile::ladder(20))].into_iter().collect();
    assert_eq!(resolve_special(10, &tiles), 10);
}

#[test]
fn test_advance_contract_errors() {
    let empty = SpecialTiles::new();
    assert_eq!(advance(10, 0, &empty, 100), Err(EngineError::InvalidRoll { roll: 0 }));
    assert_eq!(advance(10, 12, &empty, 100), Err(EngineError::InvalidRoll { roll: 12 }));
    assert!(matches!(
        advance(150, 1, &empty, 100),
        Err(EngineError::InvalidPosition { position: 150, board_size: 100 })
    ));
}

// =============================================================================
// Win
// =============================================================================

#[test]
fn test_win_only_on_finish() {
    assert!(is_win_default(100));
    for position in [0, 1, 50, 99, 101] {
        assert!(!is_win_default(position), "{position} should not win");
    }
    assert!(is_win(64, 64));
}

// =============================================================================
// Properties
// =============================================================================

fn arb_tiles() -> impl Strategy<Value = SpecialTiles> {
    proptest::collection::btree_map(2u32..100, 1u32..=100, 0..20).prop_map(|raw| {
        raw.into_iter()
            .filter(|(trigger, target)| trigger != target)
            .map(|(trigger, target)| {
                let tile = if target > trigger {
                    SpecialTile::ladder(target)
                } else {
                    SpecialTile::chute(target)
                };
                (trigger, tile)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_advance_stays_on_board(start in 1u32..=100, roll in 1u32..=6, tiles in arb_tiles()) {
        let result = advance(start, roll, &tiles, 100).unwrap();
        prop_assert!((1..=100).contains(&result));
    }

    #[test]
    fn prop_advance_is_clamp_then_special(start in 1u32..=100, roll in 1u32..=6, tiles in arb_tiles()) {
        let landed = clamp_move(start, roll, 100);
        let expected = tiles.target(landed).unwrap_or(landed);
        prop_assert_eq!(advance(start, roll, &tiles, 100).unwrap(), expected);
    }

    #[test]
    fn prop_out_of_range_rolls_rejected(start in 1u32..=100, roll in 7u32..1000) {
        prop_assert_eq!(
            advance(start, roll, &SpecialTiles::new(), 100),
            Err(EngineError::InvalidRoll { roll })
        );
    }
}
