//! Recorded card movement and undo/redo.
//!
//! ## Key Types
//!
//! - `Move`: A primitive transfer (plain or flipping) between two piles
//! - `Transaction`: The primitives of one user action
//! - `Mover`: Performs and records primitives during an action
//! - `Dealer`: A mover with the deal-only operations
//! - `History`: Undo and redo stacks of transactions

mod history;
mod mover;
mod primitive;
mod transaction;

pub use history::History;
pub use mover::{Dealer, Mover, Notifications};
pub use primitive::{Move, MoveKind};
pub use transaction::Transaction;
