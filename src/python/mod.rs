//! Python bindings for the rust-patience engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_patience as patience
//!
//! game = patience.Klondike(seed=42)
//!
//! # Click the stock to turn a card
//! game.press(40, 40)
//! game.release(40, 40)
//!
//! print(game.pile_cards("waste"))
//! game.undo()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// rust-patience: a patience card game engine.
#[pymodule]
fn rust_patience(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyKlondike>()?;
    Ok(())
}
