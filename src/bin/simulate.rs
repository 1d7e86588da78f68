//! Headless Snakes and Ladders simulator
//!
//! Plays many complete games and reports how they went.
//!
//! Usage: cargo run --bin simulate -- --games 1000 --players 2 [--config board.toml]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rust_ladders::{BoardConfig, GameBuilder, PlayerId};

/// Simulate Snakes and Ladders games
#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Play many Snakes and Ladders games and print statistics", long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 1000)]
    games: u32,

    /// Players per game (1-8)
    #[arg(long, default_value_t = 2)]
    players: usize,

    /// Seed of the first game; game i uses seed + i
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Give up on a game after this many turns
    #[arg(long, default_value_t = 10_000)]
    max_turns: u32,

    /// Board configuration TOML (defaults to the classic 10x10 board)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> Result<BoardConfig> {
    let Some(path) = path else {
        return Ok(BoardConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config = BoardConfig::from_toml_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;
    info!(games = args.games, players = args.players, ?config, "starting simulation");

    let mut wins = vec![0u32; args.players];
    let mut move_counts = Vec::with_capacity(args.games as usize);
    let mut unfinished = 0u32;

    for i in 0..args.games {
        let seed = args.seed.wrapping_add(u64::from(i));
        let mut game = GameBuilder::new()
            .player_count(args.players)
            .config(config.clone())
            .build(seed)
            .with_context(|| format!("building game with seed {seed}"))?;

        match game.play_to_completion(args.max_turns)? {
            Some(winner) => {
                wins[winner.index()] += 1;
                move_counts.push(game.move_count());
            }
            None => {
                warn!(seed, "game hit the turn cap without a winner");
                unfinished += 1;
            }
        }
    }

    println!("Games played: {}", args.games);
    for (seat, count) in wins.iter().enumerate() {
        let share = 100.0 * f64::from(*count) / f64::from(args.games.max(1));
        println!("  {}: {count} wins ({share:.1}%)", PlayerId::new(seat as u8));
    }
    if unfinished > 0 {
        println!("  unfinished: {unfinished}");
    }

    if let (Some(min), Some(max)) = (move_counts.iter().min(), move_counts.iter().max()) {
        let mean = move_counts.iter().map(|&m| f64::from(m)).sum::<f64>() / move_counts.len() as f64;
        println!("Moves per game: mean {mean:.1}, min {min}, max {max}");
    }

    Ok(())
}
