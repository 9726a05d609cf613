//! Rules: the extension contract for game variants.
//!
//! Games implement `PileStrategy` once per pile role to define:
//! - Which cards may be dragged off a pile
//! - Which packets a pile accepts
//! - How a pile reacts to clicks and completed drags
//!
//! and `Game` to lay out piles and deal.

pub mod game;
pub mod strategy;

pub use game::{Game, Notification};
pub use strategy::{DefaultStrategy, PileStrategy};
