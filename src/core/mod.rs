//! Core engine types: identifiers, configuration, geometry, RNG, errors.
//!
//! This module contains the fundamental building blocks that are game-agnostic.
//! Games configure these via `PileConfig` rather than modifying the core.

pub mod config;
pub mod error;
pub mod geometry;
pub mod rng;

pub use config::{PileConfig, PileId, PileTag, TableConfig};
pub use error::{Direction, EngineError, EngineResult};
pub use geometry::{FanOut, Point};
pub use rng::GameRng;
