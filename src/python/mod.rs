//! Python bindings for the rust-ladders engine.
//!
//! Lets a Python front end run the rules while it owns drawing and animation.
//!
//! # Quick Start
//!
//! ```python
//! import rust_ladders as sl
//!
//! game = sl.Game(player_count=2, seed=7)
//! board = game.layout()          # 100 tiles, finish first
//!
//! while not game.is_over():
//!     turn = game.take_turn()
//!     print(turn)
//!
//! print("winner:", game.winner)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// rust-ladders: Snakes and Ladders rules engine.
#[pymodule]
fn rust_ladders(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySpecialTile>()?;
    m.add_class::<PyTileDescriptor>()?;
    m.add_class::<PyTurnResult>()?;
    m.add_class::<PyGame>()?;

    m.add_function(wrap_pyfunction!(roll_dice, m)?)?;
    m.add_function(wrap_pyfunction!(advance, m)?)?;
    m.add_function(wrap_pyfunction!(is_win, m)?)?;

    Ok(())
}
