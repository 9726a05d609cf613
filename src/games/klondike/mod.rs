//! Klondike: the reference game.
//!
//! - Stock: click to turn a card onto the waste, or to recycle the waste
//! - Waste: drag or click its top card into play
//! - Tableaus: build down in alternating colours; only Kings fill a gap
//! - Foundations: build up by suit from Ace; full foundations win

mod game;
mod strategies;

pub use game::{KlondikeGame, KlondikePiles, FOUNDATION_COUNT, TABLEAU_COUNT};
pub use strategies::{FoundationStrategy, StockStrategy, TableauStrategy, WasteStrategy};

use crate::core::PileTag;

pub const STOCK: PileTag = PileTag::new(0);
pub const WASTE: PileTag = PileTag::new(1);
pub const TABLEAU: PileTag = PileTag::new(2);
pub const FOUNDATION: PileTag = PileTag::new(3);
