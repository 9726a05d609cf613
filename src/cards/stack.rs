//! Ordered card sequences shared by piles and dragged packets.
//!
//! Index 0 is the bottom card, the last index is the top. Read accessors
//! count from the top starting at 1, matching how players talk about a
//! pile ("the second card from the top").
//!
//! All mutating methods are crate-private: outside code moves cards only
//! through a [`Mover`](crate::moves::Mover), which records every change.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::{EngineError, EngineResult, GameRng};

/// An ordered stack of cards.
///
/// Backed by `im::Vector` so snapshots of a pile are O(1) to take.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStack {
    cards: Vector<Card>,
}

impl CardStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards in the stack.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card.
    pub fn top(&self) -> EngineResult<&Card> {
        self.from_top(1)
    }

    /// The bottom card.
    pub fn bottom(&self) -> EngineResult<&Card> {
        self.cards.front().ok_or(EngineError::Index {
            index: 1,
            size: 0,
        })
    }

    /// The card at `index` counting from the top, where the top is 1.
    pub fn from_top(&self, index: usize) -> EngineResult<&Card> {
        let size = self.cards.len();
        if index == 0 || index > size {
            return Err(EngineError::Index { index, size });
        }
        self.cards
            .get(size - index)
            .ok_or(EngineError::Index { index, size })
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// The underlying cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Add one card to the top.
    pub(crate) fn add(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Add cards to the top, preserving their order (first ends up lowest).
    pub(crate) fn add_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Add the 13 cards of a suit face-down, Ace first.
    pub(crate) fn add_suit(&mut self, suit: Suit) {
        self.add_all(Rank::ALL.iter().map(|&rank| Card::new(rank, suit)));
    }

    /// Remove and return the top card.
    pub(crate) fn deal(&mut self) -> EngineResult<Card> {
        self.cards.pop_back().ok_or(EngineError::EmptyStack)
    }

    /// Remove the top `count` cards, returned bottom to top.
    ///
    /// Fails without touching the stack if fewer than `count` cards remain.
    pub(crate) fn take_top(&mut self, count: usize) -> EngineResult<Vector<Card>> {
        let size = self.cards.len();
        if count > size {
            return Err(EngineError::EmptyStack);
        }
        Ok(self.cards.split_off(size - count))
    }

    /// Apply a uniform random permutation to the whole stack.
    pub(crate) fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }
}

impl FromIterator<Card> for CardStack {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spades() -> CardStack {
        let mut stack = CardStack::new();
        stack.add_suit(Suit::Spades);
        stack
    }

    #[test]
    fn test_add_suit_order() {
        let stack = spades();

        assert_eq!(stack.size(), 13);
        assert_eq!(stack.bottom().unwrap().rank(), Rank::Ace);
        assert_eq!(stack.top().unwrap().rank(), Rank::King);
        assert_eq!(stack.from_top(2).unwrap().rank(), Rank::Queen);
        assert!(stack.iter().all(|c| !c.is_face_up()));
    }

    #[test]
    fn test_deal_from_top() {
        let mut stack = spades();

        assert_eq!(stack.deal().unwrap().rank(), Rank::King);
        assert_eq!(stack.deal().unwrap().rank(), Rank::Queen);
        assert_eq!(stack.size(), 11);
    }

    #[test]
    fn test_deal_empty_fails() {
        let mut stack = CardStack::new();

        assert_eq!(stack.deal(), Err(EngineError::EmptyStack));
    }

    #[test]
    fn test_read_accessors_out_of_range() {
        let stack = spades();
        let empty = CardStack::new();

        assert_eq!(stack.from_top(0), Err(EngineError::Index { index: 0, size: 13 }));
        assert_eq!(stack.from_top(14), Err(EngineError::Index { index: 14, size: 13 }));
        assert_eq!(empty.top(), Err(EngineError::Index { index: 1, size: 0 }));
        assert!(empty.bottom().is_err());
    }

    #[test]
    fn test_take_top_preserves_order() {
        let mut stack = spades();

        let taken = stack.take_top(3).unwrap();
        let ranks: Vec<_> = taken.iter().map(|c| c.rank()).collect();

        assert_eq!(ranks, vec![Rank::Jack, Rank::Queen, Rank::King]);
        assert_eq!(stack.top().unwrap().rank(), Rank::Ten);
    }

    #[test]
    fn test_take_top_too_many_leaves_stack_intact() {
        let mut stack = spades();

        assert_eq!(stack.take_top(14), Err(EngineError::EmptyStack));
        assert_eq!(stack.size(), 13);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut stack = spades();
        let before = stack.clone();

        stack.shuffle(&mut GameRng::new(42));

        assert_eq!(stack.size(), 13);
        assert_ne!(stack, before);

        let mut after: Vec<_> = stack.iter().map(|c| c.rank()).collect();
        after.sort();
        assert_eq!(after, Rank::ALL.to_vec());
    }
}
