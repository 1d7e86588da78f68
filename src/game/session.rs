//! Game session implementation.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::{build_layout, generate_special_tiles, SpecialTile, SpecialTiles, TileDescriptor};
use crate::core::{BoardConfig, EngineError, GameRng, PlayerId, PlayerMap, Position, START_POSITION};
use crate::rules::{advance, clamp_move, is_valid_roll, is_win, roll_dice};

/// Most players a single board supports.
pub const MAX_PLAYERS: usize = 8;

/// RNG stream used for special tile placement.
const TILES_CONTEXT: &str = "tiles";

/// RNG stream used for dice rolls.
const DICE_CONTEXT: &str = "dice";

/// A player's seat and token position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Seat.
    pub player: PlayerId,
    /// Tile the token is on.
    pub position: Position,
}

impl PlayerState {
    fn at_start(player: PlayerId) -> Self {
        Self {
            player,
            position: START_POSITION,
        }
    }
}

/// Everything that happened in one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Who moved.
    pub player: PlayerId,
    /// Die face rolled.
    pub roll: u32,
    /// Position before the move.
    pub start_position: Position,
    /// Position after the roll, before any ladder or chute.
    pub pre_special_position: Position,
    /// Position after the whole turn.
    pub final_position: Position,
    /// Ladder or chute taken this turn.
    pub special: Option<SpecialTile>,
    /// Whether this turn reached the finish.
    pub won: bool,
}

impl std::fmt::Display for TurnResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rolled {}: {} -> {}",
            self.player, self.roll, self.start_position, self.pre_special_position
        )?;
        if let Some(special) = self.special {
            write!(f, " ({special})")?;
        }
        if self.won {
            write!(f, " and wins")?;
        }
        Ok(())
    }
}

/// One game of Snakes and Ladders.
///
/// Owns the special tile mapping, the player positions and the dice for a
/// single session. Separate `Game` values share nothing.
#[derive(Clone, Debug)]
pub struct Game {
    config: BoardConfig,
    tiles: SpecialTiles,
    players: PlayerMap<PlayerState>,
    active_player: PlayerId,
    move_count: u32,
    history: Vector<TurnResult>,
    winner: Option<PlayerId>,
    dice: GameRng,
    seed: u64,
    /// Built from caller-supplied tiles; restarts keep the same board.
    fixed_board: bool,
}

/// Builder for creating a Game.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    player_count: usize,
    config: BoardConfig,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            config: BoardConfig::default(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    /// Build a game with randomly generated special tiles.
    pub fn build(self, seed: u64) -> Result<Game, EngineError> {
        self.check_player_count()?;
        let tiles = generate_tiles(&self.config, seed)?;
        Ok(Game::from_parts(self.config, tiles, self.player_count, seed, false))
    }

    /// Build a game on a fixed set of special tiles.
    ///
    /// The board shape and the tiles are checked; the ladder and chute counts
    /// in the config are ignored. Restarting the game keeps these tiles.
    pub fn build_with_tiles(self, tiles: SpecialTiles, seed: u64) -> Result<Game, EngineError> {
        self.check_player_count()?;
        self.config.validate_board()?;
        tiles.validate(self.config.board_size)?;
        Ok(Game::from_parts(self.config, tiles, self.player_count, seed, true))
    }

    fn check_player_count(&self) -> Result<(), EngineError> {
        if (1..=MAX_PLAYERS).contains(&self.player_count) {
            Ok(())
        } else {
            Err(EngineError::invalid_configuration(format!(
                "player count must be 1-{MAX_PLAYERS}, got {}",
                self.player_count
            )))
        }
    }
}

fn generate_tiles(config: &BoardConfig, seed: u64) -> Result<SpecialTiles, EngineError> {
    let mut rng = GameRng::new(seed).for_context(TILES_CONTEXT);
    generate_special_tiles(config, &mut rng)
}

impl Game {
    fn from_parts(
        config: BoardConfig,
        tiles: SpecialTiles,
        player_count: usize,
        seed: u64,
        fixed_board: bool,
    ) -> Self {
        debug!(player_count, seed, special_tiles = tiles.len(), fixed_board, "new game");

        Self {
            config,
            tiles,
            players: PlayerMap::new(player_count, PlayerState::at_start),
            active_player: PlayerId::new(0),
            move_count: 0,
            history: Vector::new(),
            winner: None,
            dice: GameRng::new(seed).for_context(DICE_CONTEXT),
            seed,
            fixed_board,
        }
    }

    /// Get the board configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Get the special tiles for this game.
    pub fn special_tiles(&self) -> &SpecialTiles {
        &self.tiles
    }

    /// Describe every tile for rendering, finish first.
    pub fn layout(&self) -> Vec<TileDescriptor> {
        build_layout(&self.tiles, self.config.rows, self.config.cols)
    }

    /// Seed the game was built (or last restarted) with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the number of players.
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Iterate over every player's state in seat order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerState> {
        self.players.iter().map(|(_, state)| state)
    }

    /// Position of a player, or `None` for an unknown seat.
    pub fn position(&self, player: PlayerId) -> Option<Position> {
        self.players.get(player).map(|state| state.position)
    }

    /// Player whose turn it is.
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Turns taken so far, across all players.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Every turn taken so far, oldest first.
    pub fn history(&self) -> &Vector<TurnResult> {
        &self.history
    }

    /// The player who reached the finish, if any.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Check if the game has ended.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Roll the die for the active player and resolve the turn.
    #[instrument(level = "debug", skip(self), fields(player = %self.active_player))]
    pub fn take_turn(&mut self) -> Result<TurnResult, EngineError> {
        self.ensure_running()?;
        let roll = roll_dice(&mut self.dice);
        self.resolve_turn(roll)
    }

    /// Resolve the active player's turn with an externally rolled die.
    #[instrument(level = "debug", skip(self), fields(player = %self.active_player))]
    pub fn take_turn_with_roll(&mut self, roll: u32) -> Result<TurnResult, EngineError> {
        self.ensure_running()?;
        if !is_valid_roll(roll) {
            return Err(EngineError::InvalidRoll { roll });
        }
        self.resolve_turn(roll)
    }

    /// Take turns until someone wins or `max_turns` turns have been taken.
    ///
    /// Returns the winner, or `None` if the cap was hit first.
    pub fn play_to_completion(&mut self, max_turns: u32) -> Result<Option<PlayerId>, EngineError> {
        for _ in 0..max_turns {
            if self.is_over() {
                break;
            }
            self.take_turn()?;
        }
        Ok(self.winner)
    }

    /// Start over from `seed`.
    ///
    /// All players return to the start and the history is cleared. A generated
    /// board is regenerated from `seed`; a game built with
    /// [`GameBuilder::build_with_tiles`] keeps its tiles and only reseeds the dice.
    pub fn restart(&mut self, seed: u64) -> Result<(), EngineError> {
        let tiles = if self.fixed_board {
            self.tiles.clone()
        } else {
            generate_tiles(&self.config, seed)?
        };
        *self = Self::from_parts(
            self.config.clone(),
            tiles,
            self.player_count(),
            seed,
            self.fixed_board,
        );
        Ok(())
    }

    fn ensure_running(&self) -> Result<(), EngineError> {
        match self.winner {
            Some(winner) => Err(EngineError::GameOver { winner }),
            None => Ok(()),
        }
    }

    fn resolve_turn(&mut self, roll: u32) -> Result<TurnResult, EngineError> {
        let player = self.active_player;
        let board_size = self.config.board_size;
        let start_position = self.players[player].position;

        let pre_special_position = clamp_move(start_position, roll, board_size);
        let final_position = advance(start_position, roll, &self.tiles, board_size)?;
        let won = is_win(final_position, board_size);

        let result = TurnResult {
            player,
            roll,
            start_position,
            pre_special_position,
            final_position,
            special: self.tiles.get(pre_special_position).copied(),
            won,
        };

        self.players[player].position = final_position;
        self.move_count += 1;
        self.history.push_back(result);

        debug!(
            roll,
            from = start_position,
            landed = pre_special_position,
            to = final_position,
            "turn resolved"
        );

        if won {
            self.winner = Some(player);
            info!(%player, moves = self.move_count, "player reached the finish");
        } else {
            self.active_player = player.next(self.player_count());
        }

        Ok(result)
    }
}
