//! Card system: cards and ordered card stacks.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: Identity of a card from a 52-card deck
//! - `Card`: Identity plus face-up/face-down state
//! - `CardStack`: Ordered sequence shared by piles and dragged packets

pub mod card;
pub mod stack;

pub use card::{Card, Rank, Suit};
pub use stack::CardStack;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Cards in one suit.
pub const SUIT_SIZE: usize = 13;
