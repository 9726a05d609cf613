//! Primitive moves: the smallest recorded card transfers.
//!
//! A primitive is a plain value. Its inverse is built by swapping source
//! and target, which works for both kinds:
//! - `Plain` keeps relative order, so moving the cards back restores them
//! - `Flip` reverses order and toggles faces, so doing it twice is identity

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{EngineResult, PileId};
use crate::piles::PileSet;

/// How a primitive moves its cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Order preserved: the source top becomes the target top.
    Plain,
    /// Each card turned over and the run reversed: the source top ends up
    /// lowest. Turning the waste back into the stock is one flip move.
    Flip,
}

/// One recorded transfer of `count` cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub count: usize,
    pub source: PileId,
    pub target: PileId,
    pub kind: MoveKind,
}

impl Move {
    #[must_use]
    pub const fn plain(count: usize, source: PileId, target: PileId) -> Self {
        Self {
            count,
            source,
            target,
            kind: MoveKind::Plain,
        }
    }

    #[must_use]
    pub const fn flip(count: usize, source: PileId, target: PileId) -> Self {
        Self {
            count,
            source,
            target,
            kind: MoveKind::Flip,
        }
    }

    /// The primitive that reverses this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            count: self.count,
            source: self.target,
            target: self.source,
            kind: self.kind,
        }
    }

    /// Carry out the transfer.
    ///
    /// Both piles are validated and the source checked for enough cards
    /// before anything moves.
    pub(crate) fn apply(&self, piles: &mut PileSet) -> EngineResult<()> {
        trace!(kind = ?self.kind, count = self.count, source = %self.source, target = %self.target, "apply move");

        piles.get(self.target)?;
        let cards = piles.get_mut(self.source)?.stack_mut().take_top(self.count)?;
        let target = piles.get_mut(self.target)?.stack_mut();

        match self.kind {
            MoveKind::Plain => target.add_all(cards),
            MoveKind::Flip => target.add_all(cards.into_iter().rev().map(|mut card| {
                card.flip();
                card
            })),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_swaps_piles() {
        let a = PileId::new(1);
        let b = PileId::new(2);

        assert_eq!(Move::plain(3, a, b).inverse(), Move::plain(3, b, a));
        assert_eq!(Move::flip(5, a, b).inverse(), Move::flip(5, b, a));
        assert_eq!(Move::flip(1, a, a).inverse(), Move::flip(1, a, a));
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::flip(24, PileId::new(0), PileId::new(1));
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();

        assert_eq!(mv, deserialized);
    }
}
