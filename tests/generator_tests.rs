//! Special tile generator tests.
//!
//! Every generated board must satisfy the placement rules, for any seed.

use std::collections::HashSet;

use rust_ladders::{generate_special_tiles, BoardConfig, EngineError, GameRng, SpecialKind, SpecialTile};

/// 1000 generations all terminate with a full, well-formed board.
#[test]
fn test_thousand_generations() {
    let config = BoardConfig::default();
    let mut rng = GameRng::new(1);

    for _ in 0..1000 {
        let tiles = generate_special_tiles(&config, &mut rng).unwrap();

        assert_eq!(tiles.len(), 7 + 8 + 1);

        let triggers: Vec<_> = tiles.iter().map(|(pos, _)| pos).collect();
        let targets: Vec<_> = tiles.iter().map(|(_, tile)| tile.target).collect();
        assert_eq!(triggers.iter().collect::<HashSet<_>>().len(), triggers.len());
        assert_eq!(targets.iter().collect::<HashSet<_>>().len(), targets.len());

        assert!(!tiles.contains(1));
        assert!(!tiles.contains(100));
        assert_eq!(tiles.get(99), Some(&SpecialTile::chute(1)));

        for (trigger, tile) in tiles.iter() {
            match tile.kind {
                SpecialKind::Ladder => assert!(tile.target > trigger),
                SpecialKind::Chute => assert!(tile.target < trigger),
            }
        }
    }
}

/// Triggers and targets never double up as each other.
#[test]
fn test_tiles_do_not_overlap() {
    let config = BoardConfig::default();
    for seed in 0..300 {
        let tiles = generate_special_tiles(&config, &mut GameRng::new(seed)).unwrap();
        let triggers: HashSet<_> = tiles.iter().map(|(pos, _)| pos).collect();
        for (_, tile) in tiles.iter() {
            assert!(!triggers.contains(&tile.target), "seed {seed}: target {} is a trigger", tile.target);
        }
    }
}

#[test]
fn test_custom_board() {
    let config = BoardConfig::new().with_grid(8, 8).with_ladders(4).with_chutes(5);
    for seed in 0..200 {
        let tiles = generate_special_tiles(&config, &mut GameRng::new(seed)).unwrap();
        assert_eq!(tiles.len(), 10);
        assert_eq!(tiles.target(63), Some(1));
        assert!(tiles.validate(64).is_ok());
    }
}

#[test]
fn test_impossible_board_rejected() {
    let config = BoardConfig::new().with_grid(4, 4).with_ladders(10).with_chutes(10);
    let err = generate_special_tiles(&config, &mut GameRng::new(1)).unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfiguration { .. }));
}

#[test]
fn test_tiny_budget_fails_cleanly() {
    let config = BoardConfig::default().with_max_generation_attempts(5);
    let err = generate_special_tiles(&config, &mut GameRng::new(1)).unwrap_err();
    assert!(matches!(err, EngineError::GenerationFailed { attempts: 5, .. }));
}
