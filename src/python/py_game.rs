//! Game session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::HashMap;

use crate::core::{BoardConfig, PlayerId, Position};
use crate::game::{Game, GameBuilder};

use super::py_core::{tiles_from_py, to_py_err, PySpecialTile, PyTileDescriptor, PyTurnResult};

/// Python wrapper for Game.
///
/// Drives one game; the caller handles display and animation.
#[pyclass(name = "Game")]
pub struct PyGame {
    game: Game,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - player_count: Number of players (1-8)
    /// - seed: RNG seed for the board and dice
    /// - ladders: Randomly placed ladders
    /// - chutes: Randomly placed chutes (the fixed chute is extra)
    /// - tiles: Optional fixed board as {trigger: SpecialTile}; overrides
    ///   ladders and chutes
    #[new]
    #[pyo3(signature = (player_count = 2, seed = 42, ladders = 7, chutes = 8, tiles = None))]
    fn new(
        player_count: usize,
        seed: u64,
        ladders: usize,
        chutes: usize,
        tiles: Option<HashMap<Position, PySpecialTile>>,
    ) -> PyResult<Self> {
        let builder = GameBuilder::new()
            .player_count(player_count)
            .config(BoardConfig::new().with_ladders(ladders).with_chutes(chutes));

        let game = match tiles {
            Some(tiles) => builder.build_with_tiles(tiles_from_py(tiles), seed),
            None => builder.build(seed),
        }
        .map_err(to_py_err)?;

        Ok(Self { game })
    }

    /// Roll for the active player and resolve the turn.
    fn take_turn(&mut self) -> PyResult<PyTurnResult> {
        self.game.take_turn().map(PyTurnResult).map_err(to_py_err)
    }

    /// Resolve the active player's turn with a given roll.
    fn take_turn_with_roll(&mut self, roll: u32) -> PyResult<PyTurnResult> {
        self.game
            .take_turn_with_roll(roll)
            .map(PyTurnResult)
            .map_err(to_py_err)
    }

    /// Start over from `seed`. A fixed board keeps its tiles.
    fn restart(&mut self, seed: u64) -> PyResult<()> {
        self.game.restart(seed).map_err(to_py_err)
    }

    /// Position of the player in seat `player`.
    fn position(&self, player: u8) -> PyResult<Position> {
        self.game
            .position(PlayerId::new(player))
            .ok_or_else(|| PyValueError::new_err(format!("no player in seat {player}")))
    }

    /// All tiles, finish first.
    fn layout(&self) -> Vec<PyTileDescriptor> {
        self.game.layout().into_iter().map(PyTileDescriptor).collect()
    }

    /// Special tiles as {trigger: SpecialTile}.
    fn special_tiles(&self) -> HashMap<Position, PySpecialTile> {
        self.game
            .special_tiles()
            .iter()
            .map(|(pos, tile)| (pos, PySpecialTile(*tile)))
            .collect()
    }

    /// Seat index of the player to move.
    #[getter]
    fn active_player(&self) -> usize {
        self.game.active_player().index()
    }

    /// Seat index of the winner, or None.
    #[getter]
    fn winner(&self) -> Option<usize> {
        self.game.winner().map(PlayerId::index)
    }

    #[getter]
    fn move_count(&self) -> u32 {
        self.game.move_count()
    }

    #[getter]
    fn player_count(&self) -> usize {
        self.game.player_count()
    }

    fn is_over(&self) -> bool {
        self.game.is_over()
    }

    fn __repr__(&self) -> String {
        let status = match self.game.winner() {
            Some(winner) => format!("won by P{}", winner.0),
            None => "ongoing".to_string(),
        };
        format!(
            "Game(moves={}, active=P{}, status={})",
            self.game.move_count(),
            self.game.active_player().0,
            status
        )
    }
}
