//! Packets: cards in transit between piles.
//!
//! A packet owns the cards it lifted from its origin pile for exactly one
//! gesture. It ends in one of two ways, both consuming it:
//! - `cancel_drag`: cards go back to the origin in their original order
//! - `end_drag`: cards go to the target through a `Mover`, which records
//!   the transfer for undo
//!
//! The programmatic `try_drag` and interactive drops share `start_drag` and
//! `drop_packet`, so legality is decided by one code path.

use smallvec::SmallVec;
use tracing::trace;

use super::set::PileSet;
use crate::cards::{Card, CardStack};
use crate::core::{EngineResult, PileId, Point};
use crate::moves::Mover;

/// A transient stack of cards lifted off a pile.
///
/// Never cloned: the cards exist in exactly one place at a time.
#[derive(Debug)]
pub struct Packet {
    origin: PileId,
    stack: CardStack,
    position: Point,
    x_offset: i32,
    y_offset: i32,
}

impl Packet {
    /// Remove the top `count` cards from `origin` into a new packet.
    fn lift(
        piles: &mut PileSet,
        origin: PileId,
        count: usize,
        position: Point,
        (x_offset, y_offset): (i32, i32),
    ) -> EngineResult<Self> {
        let cards = piles.get_mut(origin)?.stack_mut().take_top(count)?;
        Ok(Self {
            origin,
            stack: cards.into_iter().collect(),
            position,
            x_offset,
            y_offset,
        })
    }

    /// The pile the cards came from.
    #[must_use]
    pub fn origin(&self) -> PileId {
        self.origin
    }

    #[must_use]
    pub fn stack(&self) -> &CardStack {
        &self.stack
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.stack.size()
    }

    pub fn top(&self) -> EngineResult<&Card> {
        self.stack.top()
    }

    /// The lowest card, i.e. the one that lands on the target's top.
    pub fn bottom(&self) -> EngineResult<&Card> {
        self.stack.bottom()
    }

    pub fn from_top(&self, index: usize) -> EngineResult<&Card> {
        self.stack.from_top(index)
    }

    /// Where the packet is currently drawn.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn x_offset(&self) -> i32 {
        self.x_offset
    }

    #[must_use]
    pub fn y_offset(&self) -> i32 {
        self.y_offset
    }

    pub(crate) fn translate(&mut self, dx: i32, dy: i32) {
        self.position = self.position.offset(dx, dy);
    }

    /// Return every card to the origin, restoring its previous order.
    pub(crate) fn cancel_drag(self, piles: &mut PileSet) -> EngineResult<()> {
        trace!(origin = %self.origin, cards = self.size(), "packet returned to origin");
        piles
            .get_mut(self.origin)?
            .stack_mut()
            .add_all(self.stack.iter().copied());
        Ok(())
    }

    /// Deliver the cards to `target` and let the origin react.
    pub(crate) fn end_drag(self, target: PileId, mover: &mut Mover<'_>) -> EngineResult<()> {
        let origin = self.origin;
        mover.move_packet(self, target)?;
        let strategy = mover.piles().get(origin)?.strategy();
        strategy.finish_drag(origin, target, mover)
    }

    pub(crate) fn into_stack(self) -> CardStack {
        self.stack
    }
}

/// Lift the top `count` cards of `origin` if its strategy lets that run go.
///
/// With `fanned` set, the packet keeps the origin's fan-out for display;
/// programmatic attempts use a squared packet.
pub(crate) fn start_drag(
    piles: &mut PileSet,
    origin: PileId,
    count: usize,
    fanned: bool,
) -> EngineResult<Option<Packet>> {
    let pile = piles.get(origin)?;
    let size = pile.size();
    if count == 0 || count > size {
        return Ok(None);
    }

    let index = size - count;
    let selected: SmallVec<[Card; 13]> = pile.stack().iter().skip(index).copied().collect();
    if !pile.strategy().check_start_drag(pile, &selected) {
        return Ok(None);
    }

    let position = pile.card_position(index);
    let offsets = if fanned {
        (pile.x_offset(), pile.y_offset())
    } else {
        (0, 0)
    };
    Packet::lift(piles, origin, count, position, offsets).map(Some)
}

/// Drop `packet` on `target` if the target accepts it; otherwise send the
/// cards home. Returns whether the drop happened.
pub(crate) fn drop_packet(
    packet: Packet,
    target: PileId,
    mover: &mut Mover<'_>,
) -> EngineResult<bool> {
    let accepted = match mover.piles().get(target) {
        Ok(pile) => pile.can_drop(&packet),
        Err(err) => {
            packet.cancel_drag(mover.piles_mut())?;
            return Err(err);
        }
    };

    if accepted {
        packet.end_drag(target, mover)?;
        Ok(true)
    } else {
        packet.cancel_drag(mover.piles_mut())?;
        Ok(false)
    }
}

/// Programmatically drag the top `count` cards of `origin` onto `target`.
///
/// Runs the same checks as an interactive drag. A refused attempt leaves
/// both piles untouched and records nothing.
pub(crate) fn try_drag(
    mover: &mut Mover<'_>,
    origin: PileId,
    count: usize,
    target: PileId,
) -> EngineResult<bool> {
    if !mover.piles().get(origin)?.can_drag() {
        return Ok(false);
    }

    match start_drag(mover.piles_mut(), origin, count, false)? {
        Some(packet) => drop_packet(packet, target, mover),
        None => Ok(false),
    }
}
