//! Klondike pile strategies.
//!
//! Strategies are stateless and find their partner piles by tag, so one
//! value serves every pile of a role.

use smallvec::SmallVec;

use super::{FOUNDATION, TABLEAU, WASTE};
use crate::cards::{Card, Rank, SUIT_SIZE};
use crate::core::{EngineResult, PileId, PileTag};
use crate::moves::Mover;
use crate::piles::{Packet, Pile};
use crate::rules::{Notification, PileStrategy};

/// Raise the win notification once every foundation holds a full suit.
pub(crate) fn check_win(mover: &mut Mover<'_>) {
    let sizes: SmallVec<[usize; 4]> = mover.piles().tagged(FOUNDATION).map(Pile::size).collect();
    if !sizes.is_empty() && sizes.iter().all(|&size| size == SUIT_SIZE) {
        mover.notify(Notification::Won);
    }
}

/// Try `count` cards from `origin` onto each `tag` pile in order, stopping
/// at the first that takes them.
fn try_each(mover: &mut Mover<'_>, origin: PileId, count: usize, tag: PileTag) -> EngineResult<bool> {
    for target in mover.piles().tagged_ids(tag) {
        if target != origin && mover.try_drag(origin, count, target)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// The face-down draw pile.
#[derive(Clone, Copy, Debug, Default)]
pub struct StockStrategy;

impl PileStrategy for StockStrategy {
    fn check_can_drag(&self, _pile: &Pile) -> bool {
        false
    }

    fn check_can_drop(&self, _pile: &Pile, _packet: &Packet) -> bool {
        false
    }

    /// Turn one card onto the waste, or when empty turn the whole waste
    /// back over.
    fn handle_click(&self, pile: PileId, _num_selected: usize, mover: &mut Mover<'_>) -> EngineResult<()> {
        let Some(&waste) = mover.piles().tagged_ids(WASTE).first() else {
            return Ok(());
        };

        if mover.pile(pile)?.is_empty() {
            let count = mover.pile(waste)?.size();
            mover.flip_move(count, waste, pile)
        } else {
            mover.flip_move(1, pile, waste)
        }
    }
}

/// Face-up cards turned off the stock. Cards only leave it.
#[derive(Clone, Copy, Debug, Default)]
pub struct WasteStrategy;

impl PileStrategy for WasteStrategy {
    fn check_can_drop(&self, _pile: &Pile, _packet: &Packet) -> bool {
        false
    }

    fn finish_drag(&self, _origin: PileId, _target: PileId, mover: &mut Mover<'_>) -> EngineResult<()> {
        check_win(mover);
        Ok(())
    }

    /// Play the top card to a foundation if possible, else to a tableau.
    fn handle_click(&self, pile: PileId, num_selected: usize, mover: &mut Mover<'_>) -> EngineResult<()> {
        if num_selected == 0 {
            return Ok(());
        }
        if !try_each(mover, pile, 1, FOUNDATION)? {
            try_each(mover, pile, 1, TABLEAU)?;
        }
        Ok(())
    }
}

/// The seven fanned building piles.
#[derive(Clone, Copy, Debug, Default)]
pub struct TableauStrategy;

impl PileStrategy for TableauStrategy {
    fn check_can_drop(&self, pile: &Pile, packet: &Packet) -> bool {
        let Ok(bottom) = packet.bottom() else {
            return false;
        };
        match pile.top() {
            Ok(top) => {
                top.is_face_up() && top.is_red() != bottom.is_red() && top.value() == bottom.value() + 1
            }
            Err(_) => bottom.rank() == Rank::King,
        }
    }

    fn check_start_drag(&self, _pile: &Pile, selected: &[Card]) -> bool {
        selected.iter().all(Card::is_face_up)
    }

    /// Turn up the newly exposed card.
    fn finish_drag(&self, origin: PileId, _target: PileId, mover: &mut Mover<'_>) -> EngineResult<()> {
        let exposed = mover.pile(origin)?.top().ok().copied();
        if exposed.is_some_and(|card| !card.is_face_up()) {
            mover.flip_top(origin)?;
        }
        check_win(mover);
        Ok(())
    }

    /// A single card goes to a foundation if it can; otherwise the clicked
    /// run moves to the first tableau accepting it.
    fn handle_click(&self, pile: PileId, num_selected: usize, mover: &mut Mover<'_>) -> EngineResult<()> {
        if num_selected == 0 {
            return Ok(());
        }
        if num_selected == 1 && try_each(mover, pile, 1, FOUNDATION)? {
            return Ok(());
        }
        try_each(mover, pile, num_selected, TABLEAU)?;
        Ok(())
    }
}

/// The four suit piles built up from Ace to King.
#[derive(Clone, Copy, Debug, Default)]
pub struct FoundationStrategy;

impl PileStrategy for FoundationStrategy {
    fn check_can_drop(&self, pile: &Pile, packet: &Packet) -> bool {
        if packet.size() != 1 {
            return false;
        }
        let Ok(card) = packet.bottom() else {
            return false;
        };
        match pile.top() {
            Ok(top) => top.suit() == card.suit() && top.value() + 1 == card.value(),
            Err(_) => card.rank() == Rank::Ace,
        }
    }

    fn check_start_drag(&self, _pile: &Pile, selected: &[Card]) -> bool {
        selected.len() == 1
    }

    /// Send the top card back to a tableau.
    fn handle_click(&self, pile: PileId, num_selected: usize, mover: &mut Mover<'_>) -> EngineResult<()> {
        if num_selected == 0 {
            return Ok(());
        }
        try_each(mover, pile, num_selected, TABLEAU)?;
        Ok(())
    }
}
