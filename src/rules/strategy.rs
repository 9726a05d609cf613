//! Pile strategies: the per-pile rule objects games plug in.
//!
//! A pile never decides for itself whether a card may leave or land on
//! it; it asks its strategy. The engine supplies the mechanism (packets,
//! movers, history) and strategies supply the policy.
//!
//! ## Implementation Notes
//!
//! - `check_*` methods are queries. They run on every hover, must be cheap,
//!   and must not change any pile.
//! - `finish_drag` and `handle_click` may move cards, but only through the
//!   provided `Mover`, so whatever they do is undone with the action that
//!   triggered them.
//! - Every method has a permissive default; a strategy overrides only what
//!   differs.

use crate::cards::Card;
use crate::core::{EngineResult, PileId};
use crate::moves::Mover;
use crate::piles::{Packet, Pile};

/// Rules for one role of pile.
///
/// One strategy value may be shared by several piles (all seven Klondike
/// tableaus share a single `TableauStrategy`).
pub trait PileStrategy {
    /// Whether cards may be dragged off `pile` at all.
    fn check_can_drag(&self, _pile: &Pile) -> bool {
        true
    }

    /// Whether `packet` may be dropped on `pile`.
    fn check_can_drop(&self, _pile: &Pile, _packet: &Packet) -> bool {
        true
    }

    /// Whether the `selected` run (bottom to top, ending at the pile's top)
    /// may be lifted off `pile`.
    fn check_start_drag(&self, _pile: &Pile, _selected: &[Card]) -> bool {
        true
    }

    /// React to a completed drag off `origin` onto `target`.
    ///
    /// The cards have already reached `target` when this runs.
    fn finish_drag(&self, _origin: PileId, _target: PileId, _mover: &mut Mover<'_>) -> EngineResult<()> {
        Ok(())
    }

    /// React to a click selecting the top `num_selected` cards of `pile`
    /// (0 when the pile is empty).
    fn handle_click(&self, _pile: PileId, _num_selected: usize, _mover: &mut Mover<'_>) -> EngineResult<()> {
        Ok(())
    }
}

/// A strategy allowing everything and reacting to nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultStrategy;

impl PileStrategy for DefaultStrategy {}
