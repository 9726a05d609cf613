//! The table: piles, history, and the interaction state machine.
//!
//! ## Key Types
//!
//! - `Table`: Owns piles and undo/redo history; runs actions as transactions
//! - `TableController`: Turns pointer events into clicks, drags and drops
//! - `TableSnapshot`: Serializable copy of all pile contents
//!
//! Everything is single-threaded and synchronous. One event is handled to
//! completion before the next; notifications raised by an event are only
//! visible afterwards through `TableController::poll_notification`.

mod controller;
mod event;
mod state;

pub use controller::TableController;
pub use event::{CursorHint, InteractionState, PointerEvent};
pub use state::{PileSnapshot, Table, TableSnapshot};
