//! Transactions: the unit of undo.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::primitive::Move;
use crate::core::EngineResult;
use crate::piles::PileSet;

/// The ordered primitives making up one user-level action.
///
/// Most actions are one or two primitives (a drop plus a flip of the
/// exposed card), so they stay inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    moves: SmallVec<[Move; 4]>,
}

impl Transaction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Recorded primitives in the order they were performed.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Apply the inverse of every primitive, last first.
    ///
    /// All or nothing: if a primitive fails, the ones already applied are
    /// reverted before the error is returned.
    pub(crate) fn undo(&self, piles: &mut PileSet) -> EngineResult<()> {
        let inverses: SmallVec<[Move; 4]> = self.moves.iter().rev().map(|mv| mv.inverse()).collect();
        replay(&inverses, piles)
    }

    /// Re-apply every primitive, first first. All or nothing, like `undo`.
    pub(crate) fn redo(&self, piles: &mut PileSet) -> EngineResult<()> {
        replay(&self.moves, piles)
    }
}

fn replay(moves: &[Move], piles: &mut PileSet) -> EngineResult<()> {
    for (applied, mv) in moves.iter().enumerate() {
        if let Err(err) = mv.apply(piles) {
            moves[..applied]
                .iter()
                .rev()
                .try_for_each(|done| done.inverse().apply(piles))?;
            return Err(err);
        }
    }
    Ok(())
}

impl FromIterator<Move> for Transaction {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}
