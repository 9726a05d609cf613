//! The game extension point.
//!
//! A game variant differs from every other only in its piles, their
//! strategies, and its initial deal. The engine calls into `Game` but
//! never interprets game-specific concepts directly.

use serde::{Deserialize, Serialize};

use crate::core::EngineResult;
use crate::moves::Dealer;
use crate::table::Table;

/// User-facing events raised by strategies during an action.
///
/// They are queued and handed out only after the triggering input event
/// has been fully handled, so a listener never observes a half-finished
/// transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notification {
    /// The game has been won.
    Won,
}

/// A patience game variant.
///
/// ## Implementation Notes
///
/// - `start`: add piles (with their strategies and positions) to the table
/// - `deal_game`: populate the empty piles; called once, and its moves are
///   made permanent rather than undoable
pub trait Game {
    /// Display name of the variant.
    fn name(&self) -> &str;

    /// Construct the piles for this game on `table`.
    fn start(&mut self, table: &mut Table) -> EngineResult<()>;

    /// Deal the initial layout.
    fn deal_game(&self, dealer: &mut Dealer<'_>) -> EngineResult<()>;
}
