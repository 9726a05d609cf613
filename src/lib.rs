//! # rust-patience
//!
//! A pluggable engine for patience (solitaire) card games.
//!
//! ## Design Principles
//!
//! 1. **Mechanism, Not Policy**: The engine moves cards, records history and
//!    interprets pointer gestures. Which moves are legal is decided by a
//!    `PileStrategy` attached to each pile, so new games need no engine
//!    changes.
//!
//! 2. **Everything Is Undoable**: Cards change place or face only through a
//!    `Mover`, which records each primitive. One user action is one
//!    `Transaction`, undone and redone as a unit.
//!
//! 3. **Configuration Over Convention**: Games define their piles via
//!    `PileConfig` and opaque `PileTag` roles at startup.
//!
//! ## Architecture
//!
//! - **Single-threaded reducer**: `TableController` handles one pointer event
//!   to completion before the next. Nothing suspends mid-gesture.
//!
//! - **Persistent Data Structures**: Card stacks use `im` vectors, so
//!   snapshots of the whole table are cheap.
//!
//! ## Modules
//!
//! - `core`: IDs, configuration, geometry, errors, RNG
//! - `cards`: Cards and card stacks
//! - `piles`: Piles, the pile arena, and dragged packets
//! - `rules`: `PileStrategy` and `Game` extension points
//! - `moves`: Primitive moves, transactions, mover, history
//! - `table`: Table state and the pointer state machine
//! - `games`: Klondike

pub mod cards;
pub mod core;
pub mod games;
pub mod moves;
pub mod piles;
pub mod rules;
pub mod table;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Direction, EngineError, EngineResult, FanOut, GameRng, PileConfig, PileId, PileTag, Point,
    TableConfig,
};

pub use crate::cards::{Card, CardStack, Rank, Suit, DECK_SIZE, SUIT_SIZE};

pub use crate::piles::{Packet, Pile, PileSet};

pub use crate::rules::{DefaultStrategy, Game, Notification, PileStrategy};

pub use crate::moves::{Dealer, History, Move, MoveKind, Mover, Transaction};

pub use crate::table::{
    CursorHint, InteractionState, PileSnapshot, PointerEvent, Table, TableController, TableSnapshot,
};

pub use crate::games::klondike::KlondikeGame;
