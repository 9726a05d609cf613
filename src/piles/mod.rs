//! Piles and packets.
//!
//! Piles are **game-configured**, not hardcoded. Games add their piles
//! (stock, tableau, foundation, ...) via `PileConfig` at startup and attach
//! a `PileStrategy` to each.
//!
//! ## Key Types
//!
//! - `Pile`: A named, positioned card stack with a strategy
//! - `PileSet`: The table's pile arena and hit-testing
//! - `Packet`: Cards lifted off a pile for the length of one gesture

mod packet;
mod pile;
mod set;

pub use packet::Packet;
pub use pile::Pile;
pub use set::PileSet;

pub(crate) use packet::{drop_packet, start_drag, try_drag};

// Re-export pile types from core for convenience
pub use crate::core::config::{PileConfig, PileId, PileTag};
