//! Undo/redo history of committed transactions.

use tracing::debug;

use super::transaction::Transaction;
use crate::core::{Direction, EngineError, EngineResult};
use crate::piles::PileSet;

/// Two stacks of transactions.
///
/// Committing a new action throws away everything that could have been
/// redone, so the history is always one linear timeline.
#[derive(Clone, Debug, Default)]
pub struct History {
    undo: Vec<Transaction>,
    redo: Vec<Transaction>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a finished transaction. Empty transactions are not actions and
    /// are dropped; returns whether anything was committed.
    pub fn commit(&mut self, transaction: Transaction) -> bool {
        if transaction.is_empty() {
            return false;
        }
        debug!(moves = transaction.len(), "commit");
        self.undo.push(transaction);
        self.redo.clear();
        true
    }

    /// Forget everything, making the current layout the starting point.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Revert the most recent action.
    ///
    /// If the piles no longer allow it, nothing changes: the piles are left
    /// as they were and the action stays undoable.
    pub fn undo(&mut self, piles: &mut PileSet) -> EngineResult<()> {
        let transaction = self
            .undo
            .pop()
            .ok_or(EngineError::HistoryUnderflow(Direction::Undo))?;
        debug!(moves = transaction.len(), "undo");
        if let Err(err) = transaction.undo(piles) {
            self.undo.push(transaction);
            return Err(err);
        }
        self.redo.push(transaction);
        Ok(())
    }

    /// Re-apply the most recently undone action. Fails without effect,
    /// like `undo`.
    pub fn redo(&mut self, piles: &mut PileSet) -> EngineResult<()> {
        let transaction = self
            .redo
            .pop()
            .ok_or(EngineError::HistoryUnderflow(Direction::Redo))?;
        debug!(moves = transaction.len(), "redo");
        if let Err(err) = transaction.redo(piles) {
            self.redo.push(transaction);
            return Err(err);
        }
        self.undo.push(transaction);
        Ok(())
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// The action `undo` would revert next.
    #[must_use]
    pub fn last(&self) -> Option<&Transaction> {
        self.undo.last()
    }
}
