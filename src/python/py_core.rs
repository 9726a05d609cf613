//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::Card;
use crate::core::EngineError;

impl From<EngineError> for PyErr {
    fn from(err: EngineError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Rank value, Ace = 1 through King = 13.
    #[getter]
    fn value(&self) -> u8 {
        self.0.value()
    }

    /// Suit letter: C, D, H or S.
    #[getter]
    fn suit(&self) -> char {
        self.0.suit().abbrev()
    }

    #[getter]
    fn face_up(&self) -> bool {
        self.0.is_face_up()
    }

    #[getter]
    fn is_red(&self) -> bool {
        self.0.is_red()
    }

    /// Two-letter abbreviation such as "TH".
    #[getter]
    fn abbrev(&self) -> String {
        self.0.abbrev()
    }

    fn __repr__(&self) -> String {
        let face = if self.0.is_face_up() { "up" } else { "down" };
        format!("Card({}, {face})", self.0.abbrev())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
