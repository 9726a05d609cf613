//! Engine errors.
//!
//! Illegal user actions are not errors: legality checks are plain `bool`
//! queries made before any mutation. The variants here are contract
//! violations (a strategy approved a move it should not have, a caller
//! read past the top of a stack) and always propagate.

use thiserror::Error;

use super::config::PileId;

/// Which history stack an operation tried to pop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Undo,
    Redo,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Undo => f.write_str("undo"),
            Direction::Redo => f.write_str("redo"),
        }
    }
}

/// Errors raised by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("cannot deal from an empty stack")]
    EmptyStack,

    #[error("index {index} out of range for a stack of {size} cards")]
    Index { index: usize, size: usize },

    #[error("nothing to {0}")]
    HistoryUnderflow(Direction),

    #[error("no such pile: {0}")]
    UnknownPile(PileId),

    #[error("the game has already been dealt")]
    AlreadyDealt,

    #[error("history cannot be replayed while a drag is in progress")]
    GestureInProgress,
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;
