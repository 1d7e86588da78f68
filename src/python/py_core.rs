//! Value type and free function bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use std::collections::HashMap;

use crate::board::{SpecialTile, SpecialTiles, TileDescriptor};
use crate::core::{EngineError, GameRng, Position};
use crate::game::TurnResult;
use crate::rules;

/// Convert an engine error into the closest Python exception.
pub(crate) fn to_py_err(err: EngineError) -> PyErr {
    match err {
        EngineError::GameOver { .. } | EngineError::GenerationFailed { .. } => {
            PyRuntimeError::new_err(err.to_string())
        }
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Python wrapper for SpecialTile.
#[pyclass(name = "SpecialTile")]
#[derive(Clone, Debug)]
pub struct PySpecialTile(pub SpecialTile);

#[pymethods]
impl PySpecialTile {
    /// Create a tile. `kind` is "ladder" or "chute".
    #[new]
    fn new(kind: &str, target: Position) -> PyResult<Self> {
        match kind {
            "ladder" => Ok(Self(SpecialTile::ladder(target))),
            "chute" => Ok(Self(SpecialTile::chute(target))),
            other => Err(PyValueError::new_err(format!(
                "unknown special tile kind {other:?}"
            ))),
        }
    }

    /// "ladder" or "chute".
    #[getter]
    fn kind(&self) -> String {
        self.0.kind.to_string()
    }

    #[getter]
    fn target(&self) -> Position {
        self.0.target
    }

    /// Themed label ("Shooting Star" / "Black Hole").
    #[getter]
    fn theme_name(&self) -> &'static str {
        self.0.kind.theme_name()
    }

    fn __repr__(&self) -> String {
        format!("SpecialTile(kind={:?}, target={})", self.kind(), self.0.target)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for TileDescriptor.
#[pyclass(name = "TileDescriptor")]
#[derive(Clone, Debug)]
pub struct PyTileDescriptor(pub TileDescriptor);

#[pymethods]
impl PyTileDescriptor {
    #[getter]
    fn position(&self) -> Position {
        self.0.position
    }

    /// The special tile here, or None.
    #[getter]
    fn special(&self) -> Option<PySpecialTile> {
        self.0.special.map(PySpecialTile)
    }

    fn __repr__(&self) -> String {
        match self.0.special {
            Some(tile) => format!("TileDescriptor({}, {})", self.0.position, tile.kind),
            None => format!("TileDescriptor({})", self.0.position),
        }
    }
}

/// Python wrapper for TurnResult.
#[pyclass(name = "TurnResult")]
#[derive(Clone, Debug)]
pub struct PyTurnResult(pub TurnResult);

#[pymethods]
impl PyTurnResult {
    /// Seat index of the player who moved.
    #[getter]
    fn player(&self) -> usize {
        self.0.player.index()
    }

    #[getter]
    fn roll(&self) -> u32 {
        self.0.roll
    }

    #[getter]
    fn start_position(&self) -> Position {
        self.0.start_position
    }

    #[getter]
    fn pre_special_position(&self) -> Position {
        self.0.pre_special_position
    }

    #[getter]
    fn final_position(&self) -> Position {
        self.0.final_position
    }

    #[getter]
    fn special(&self) -> Option<PySpecialTile> {
        self.0.special.map(PySpecialTile)
    }

    #[getter]
    fn won(&self) -> bool {
        self.0.won
    }

    fn __repr__(&self) -> String {
        format!("TurnResult({})", self.0)
    }
}

/// Build a `SpecialTiles` from a Python dict of trigger -> SpecialTile.
pub(crate) fn tiles_from_py(entries: HashMap<Position, PySpecialTile>) -> SpecialTiles {
    entries.into_iter().map(|(pos, tile)| (pos, tile.0)).collect()
}

/// Roll one die from a seeded stream.
#[pyfunction]
pub fn roll_dice(seed: u64) -> u32 {
    rules::roll_dice(&mut GameRng::new(seed))
}

/// Move from `position` by `roll` on a board with the given special tiles.
#[pyfunction]
#[pyo3(signature = (position, roll, tiles, board_size = 100))]
pub fn advance(
    position: Position,
    roll: u32,
    tiles: HashMap<Position, PySpecialTile>,
    board_size: Position,
) -> PyResult<Position> {
    rules::advance(position, roll, &tiles_from_py(tiles), board_size).map_err(to_py_err)
}

/// Check if `position` is the finish.
#[pyfunction]
#[pyo3(signature = (position, board_size = 100))]
pub fn is_win(position: Position, board_size: Position) -> bool {
    rules::is_win(position, board_size)
}
