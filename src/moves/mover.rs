//! The mover: the only way strategies and deals change piles.
//!
//! ## Key Types
//!
//! - `Mover`: records every primitive it performs into the current
//!   `Transaction`, and collects notifications raised along the way
//! - `Dealer`: a `Mover` plus the deal-only operations (`add_deck`,
//!   `add_suit`, `shuffle`). Those have no inverse, so they are reachable
//!   only while dealing, whose result is made permanent.

use std::ops::{Deref, DerefMut};

use smallvec::SmallVec;

use super::primitive::Move;
use super::transaction::Transaction;
use crate::cards::Suit;
use crate::core::{EngineResult, GameRng, PileId};
use crate::piles::{self, Packet, Pile, PileSet};
use crate::rules::Notification;

/// Queued notifications; at most one of each kind per action.
pub type Notifications = SmallVec<[Notification; 1]>;

/// Records card movements for the action in progress.
pub struct Mover<'a> {
    piles: &'a mut PileSet,
    transaction: Transaction,
    notifications: Notifications,
}

impl<'a> Mover<'a> {
    pub(crate) fn new(piles: &'a mut PileSet) -> Self {
        Self {
            piles,
            transaction: Transaction::new(),
            notifications: Notifications::new(),
        }
    }

    /// Read access to every pile.
    #[must_use]
    pub fn piles(&self) -> &PileSet {
        &*self.piles
    }

    pub(crate) fn piles_mut(&mut self) -> &mut PileSet {
        &mut *self.piles
    }

    pub fn pile(&self, id: PileId) -> EngineResult<&Pile> {
        self.piles.get(id)
    }

    fn record(&mut self, mv: Move) -> EngineResult<()> {
        if mv.count == 0 {
            return Ok(());
        }
        mv.apply(self.piles)?;
        self.transaction.push(mv);
        Ok(())
    }

    /// Move the top `count` cards of `source` onto `target`, keeping order.
    pub fn move_cards(&mut self, count: usize, source: PileId, target: PileId) -> EngineResult<()> {
        self.record(Move::plain(count, source, target))
    }

    /// Deal `count` cards one at a time from `source` to `target`, turning
    /// each over.
    pub fn flip_move(&mut self, count: usize, source: PileId, target: PileId) -> EngineResult<()> {
        self.record(Move::flip(count, source, target))
    }

    /// Turn over the top card of `pile`.
    pub fn flip_top(&mut self, pile: PileId) -> EngineResult<()> {
        self.flip_move(1, pile, pile)
    }

    /// Drag the top `count` cards of `origin` onto `target` as if the user
    /// had done it, subject to the same checks.
    ///
    /// Returns whether the cards moved. A refused attempt records nothing.
    pub fn try_drag(&mut self, origin: PileId, count: usize, target: PileId) -> EngineResult<bool> {
        piles::try_drag(self, origin, count, target)
    }

    /// Queue `notification` for delivery after the action completes.
    pub fn notify(&mut self, notification: Notification) {
        if !self.notifications.contains(&notification) {
            self.notifications.push(notification);
        }
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transaction.is_empty()
    }

    #[must_use]
    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// Land a lifted packet on `target`, recorded as a plain move from its
    /// origin.
    pub(crate) fn move_packet(&mut self, packet: Packet, target: PileId) -> EngineResult<()> {
        let origin = packet.origin();
        let count = packet.size();
        let stack = self.piles.get_mut(target)?.stack_mut();
        stack.add_all(packet.into_stack().iter().copied());
        if count > 0 {
            self.transaction.push(Move::plain(count, origin, target));
        }
        Ok(())
    }

    /// Close the action, handing back what was recorded.
    pub(crate) fn finish(self) -> (Transaction, Notifications) {
        (self.transaction, self.notifications)
    }

    /// Undo everything recorded so far and discard it.
    pub(crate) fn rollback(self) -> EngineResult<()> {
        self.transaction.undo(self.piles)
    }
}

/// A mover with the extra, non-undoable operations needed to deal.
pub struct Dealer<'a> {
    mover: Mover<'a>,
    rng: &'a mut GameRng,
}

impl<'a> Dealer<'a> {
    pub(crate) fn new(piles: &'a mut PileSet, rng: &'a mut GameRng) -> Self {
        Self {
            mover: Mover::new(piles),
            rng,
        }
    }

    /// Add a full 52-card deck face-down, one suit after another in
    /// `Suit::ALL` order, Ace to King within each.
    pub fn add_deck(&mut self, pile: PileId) -> EngineResult<()> {
        for suit in Suit::ALL {
            self.add_suit(suit, pile)?;
        }
        Ok(())
    }

    /// Add the 13 cards of `suit` face-down, Ace first.
    pub fn add_suit(&mut self, suit: Suit, pile: PileId) -> EngineResult<()> {
        self.mover.piles_mut().get_mut(pile)?.stack_mut().add_suit(suit);
        Ok(())
    }

    /// Shuffle `pile` with the table's RNG.
    pub fn shuffle(&mut self, pile: PileId) -> EngineResult<()> {
        let stack = self.mover.piles.get_mut(pile)?.stack_mut();
        stack.shuffle(self.rng);
        Ok(())
    }

    pub(crate) fn into_mover(self) -> Mover<'a> {
        self.mover
    }
}

impl<'a> Deref for Dealer<'a> {
    type Target = Mover<'a>;

    fn deref(&self) -> &Self::Target {
        &self.mover
    }
}

impl<'a> DerefMut for Dealer<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.mover
    }
}
