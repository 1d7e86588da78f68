//! Game session tests.
//!
//! Whole games from build to win, across player counts and boards.

use std::thread;

use rust_ladders::{BoardConfig, EngineError, Game, GameBuilder, PlayerId, SpecialTile, SpecialTiles};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Replay every recorded turn and check it obeys the rules.
fn check_history(game: &Game) {
    let board_size = game.config().board_size;
    let mut positions = vec![1u32; game.player_count()];
    let mut expected_player = PlayerId::new(0);

    for turn in game.history() {
        assert_eq!(turn.player, expected_player);
        assert!((1..=6).contains(&turn.roll));
        assert_eq!(turn.start_position, positions[turn.player.index()]);
        assert_eq!(
            turn.pre_special_position,
            (turn.start_position + turn.roll).min(board_size)
        );

        let tile = game.special_tiles().get(turn.pre_special_position).copied();
        assert_eq!(turn.special, tile);
        assert_eq!(
            turn.final_position,
            tile.map_or(turn.pre_special_position, |t| t.target)
        );
        assert_eq!(turn.won, turn.final_position == board_size);

        positions[turn.player.index()] = turn.final_position;
        expected_player = turn.player.next(game.player_count());
    }
}

#[test]
fn test_two_player_game_to_completion() {
    init_tracing();
    let mut game = GameBuilder::new().build(42).unwrap();

    let winner = game.play_to_completion(10_000).unwrap().expect("game should finish");

    assert_eq!(game.position(winner), Some(100));
    assert_eq!(game.move_count() as usize, game.history().len());
    assert!(game.history().last().unwrap().won);
    check_history(&game);
}

#[test]
fn test_player_counts() {
    for player_count in 1..=8 {
        let mut game = GameBuilder::new()
            .player_count(player_count)
            .build(player_count as u64)
            .unwrap();
        assert_eq!(game.player_count(), player_count);

        let winner = game.play_to_completion(10_000).unwrap();
        assert!(winner.is_some(), "{player_count}-player game did not finish");
        check_history(&game);
    }
}

#[test]
fn test_many_games_finish() {
    for seed in 0..100 {
        let mut game = GameBuilder::new().build(seed).unwrap();
        assert!(game.play_to_completion(10_000).unwrap().is_some(), "seed {seed}");
    }
}

#[test]
fn test_scripted_game() {
    let tiles: SpecialTiles = [
        (5, SpecialTile::ladder(15)),
        (25, SpecialTile::chute(3)),
        (99, SpecialTile::chute(1)),
    ]
    .into_iter()
    .collect();
    let mut game = GameBuilder::new().build_with_tiles(tiles, 0).unwrap();

    assert_eq!(game.take_turn_with_roll(4).unwrap().final_position, 15); // P0 ladder
    assert_eq!(game.take_turn_with_roll(6).unwrap().final_position, 7); // P1
    let chute = game.take_turn_with_roll(6).unwrap(); // P0 15 -> 21
    assert_eq!(chute.final_position, 21);
    assert!(chute.special.is_none());

    game.take_turn_with_roll(1).unwrap(); // P1 -> 8
    let down = game.take_turn_with_roll(4).unwrap(); // P0 21 -> 25 -> 3
    assert_eq!(down.special, Some(SpecialTile::chute(3)));
    assert_eq!(game.position(PlayerId::new(0)), Some(3));
    assert_eq!(game.position(PlayerId::new(1)), Some(8));
    assert_eq!(game.move_count(), 5);
    assert_eq!(game.active_player(), PlayerId::new(1));
}

#[test]
fn test_game_over_rejects_turns() {
    let tiles: SpecialTiles = [(2, SpecialTile::ladder(99))].into_iter().collect();
    let mut game = GameBuilder::new()
        .player_count(1)
        .build_with_tiles(tiles, 0)
        .unwrap();

    game.take_turn_with_roll(1).unwrap(); // 1 -> 2 -> 99
    assert!(game.take_turn_with_roll(1).unwrap().won);

    assert_eq!(
        game.take_turn_with_roll(3),
        Err(EngineError::GameOver { winner: PlayerId::new(0) })
    );
    assert_eq!(game.play_to_completion(10).unwrap(), Some(PlayerId::new(0)));
}

#[test]
fn test_custom_board_config() {
    let config = BoardConfig::new().with_grid(6, 6).with_ladders(3).with_chutes(3);
    let mut game = GameBuilder::new().config(config).build(11).unwrap();

    assert_eq!(game.layout().len(), 36);
    assert_eq!(game.special_tiles().target(35), Some(1));

    let winner = game.play_to_completion(10_000).unwrap().expect("game should finish");
    assert_eq!(game.position(winner), Some(36));
    check_history(&game);
}

#[test]
fn test_clone_is_independent() {
    let mut game = GameBuilder::new().build(8).unwrap();
    game.take_turn().unwrap();

    let snapshot = game.clone();
    game.take_turn().unwrap();

    assert_eq!(snapshot.move_count(), 1);
    assert_eq!(game.move_count(), 2);
    assert_eq!(snapshot.history().len(), 1);
}

/// Games on separate threads share nothing and match a sequential replay.
#[test]
fn test_games_run_in_parallel() {
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            thread::spawn(move || {
                let mut game = GameBuilder::new().build(seed).unwrap();
                game.play_to_completion(10_000).unwrap();
                game
            })
        })
        .collect();

    for (seed, handle) in handles.into_iter().enumerate() {
        let threaded = handle.join().unwrap();
        let mut sequential = GameBuilder::new().build(seed as u64).unwrap();
        sequential.play_to_completion(10_000).unwrap();
        assert_eq!(threaded.history(), sequential.history());
    }
}
