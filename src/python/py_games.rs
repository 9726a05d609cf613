//! Game bindings for Python.

use pyo3::exceptions::PyKeyError;
use pyo3::prelude::*;

use crate::core::{Point, TableConfig};
use crate::games::klondike::KlondikeGame;
use crate::rules::Notification;
use crate::table::{InteractionState, TableController};

use super::py_core::PyCard;

/// Python wrapper for a Klondike table.
///
/// Pointer coordinates are surface pixels; see `pile_names` for the piles.
#[pyclass(unsendable, name = "Klondike")]
pub struct PyKlondike {
    controller: TableController,
}

#[pymethods]
impl PyKlondike {
    /// Create and deal a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for a reproducible deal; random if omitted
    #[new]
    #[pyo3(signature = (seed = None))]
    fn new(seed: Option<u64>) -> PyResult<Self> {
        let config = TableConfig {
            seed,
            ..TableConfig::default()
        };
        let mut controller = TableController::new(config);
        controller.start(&mut KlondikeGame::new())?;
        Ok(Self { controller })
    }

    fn press(&mut self, x: i32, y: i32) -> PyResult<()> {
        Ok(self.controller.press(Point::new(x, y))?)
    }

    fn drag(&mut self, x: i32, y: i32) -> PyResult<()> {
        Ok(self.controller.drag(Point::new(x, y))?)
    }

    fn release(&mut self, x: i32, y: i32) -> PyResult<()> {
        Ok(self.controller.release(Point::new(x, y))?)
    }

    /// The pointer left the playing surface.
    fn exit(&mut self) -> PyResult<()> {
        Ok(self.controller.exit()?)
    }

    fn undo(&mut self) -> PyResult<()> {
        Ok(self.controller.undo()?)
    }

    fn redo(&mut self) -> PyResult<()> {
        Ok(self.controller.redo()?)
    }

    fn can_undo(&self) -> bool {
        self.controller.can_undo()
    }

    fn can_redo(&self) -> bool {
        self.controller.can_redo()
    }

    /// Whether a drag is in progress.
    #[getter]
    fn dragging(&self) -> bool {
        self.controller.state() == InteractionState::Dragging
    }

    /// The seed the deal was shuffled with.
    #[getter]
    fn seed(&self) -> u64 {
        self.controller.table().seed()
    }

    /// Pile names, back to front.
    fn pile_names(&self) -> Vec<String> {
        self.controller
            .table()
            .piles()
            .iter()
            .map(|pile| pile.name().to_string())
            .collect()
    }

    /// Cards of the named pile, bottom to top.
    fn pile_cards(&self, name: &str) -> PyResult<Vec<PyCard>> {
        let pile = self
            .controller
            .table()
            .piles()
            .by_name(name)
            .ok_or_else(|| PyKeyError::new_err(name.to_string()))?;
        Ok(pile.stack().iter().copied().map(PyCard).collect())
    }

    /// Take the pending win notification, if any.
    fn poll_won(&mut self) -> bool {
        let mut won = false;
        while let Some(notification) = self.controller.poll_notification() {
            match notification {
                Notification::Won => won = true,
            }
        }
        won
    }
}
