//! Table configuration types.
//!
//! Games configure the engine at startup by providing:
//! - `PileConfig`: Defines a pile (name, role tag, position, fan-out)
//! - `TableConfig`: Card geometry, fan offsets, surface size and RNG seed
//!
//! The engine never hardcodes pile roles - games define them via `PileTag`.

use serde::{Deserialize, Serialize};

use super::geometry::{FanOut, Point};

/// Pile identifier, assigned by the table in insertion (z-) order.
///
/// The engine doesn't interpret pile IDs - they're opaque handles into
/// the table's pile arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PileId(pub u16);

impl PileId {
    /// Create a new pile ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Index into the pile arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}

/// Pile role identifier. Games define what roles exist.
///
/// Strategies use tags to find their partner piles (the stock finds the
/// waste, the waste finds every foundation) without holding pile IDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileTag(pub u16);

impl PileTag {
    /// Create a new pile tag.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw tag value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// Configuration for a single pile.
///
/// ```
/// use rust_patience::core::{PileConfig, PileTag, FanOut};
///
/// let tableau = PileConfig::new("tableau-0", PileTag::new(2))
///     .at(10, 160)
///     .vertical();
///
/// assert_eq!(tableau.fan, FanOut::Vertical);
/// assert_eq!(tableau.position.y, 160);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileConfig {
    /// Unique human-readable name.
    pub name: String,

    /// Role of the pile within its game.
    pub tag: PileTag,

    /// Upper-left corner on the table.
    pub position: Point,

    /// How successive cards are offset.
    pub fan: FanOut,
}

impl PileConfig {
    /// Create a squared-up pile configuration at the origin.
    pub fn new(name: impl Into<String>, tag: PileTag) -> Self {
        Self {
            name: name.into(),
            tag,
            position: Point::default(),
            fan: FanOut::Squared,
        }
    }

    /// Place the pile's upper-left corner.
    #[must_use]
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.position = Point::new(x, y);
        self
    }

    /// Stack every card exactly on top of the previous one.
    #[must_use]
    pub fn squared(mut self) -> Self {
        self.fan = FanOut::Squared;
        self
    }

    /// Fan successive cards to the right.
    #[must_use]
    pub fn horizontal(mut self) -> Self {
        self.fan = FanOut::Horizontal;
        self
    }

    /// Fan successive cards downward.
    #[must_use]
    pub fn vertical(mut self) -> Self {
        self.fan = FanOut::Vertical;
        self
    }
}

/// Table-wide configuration.
///
/// All geometry is in surface pixels. Deserializes with defaults for any
/// missing field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Width of a single card image.
    pub card_width: i32,

    /// Height of a single card image.
    pub card_height: i32,

    /// Horizontal offset between cards of a horizontally fanned pile.
    pub fan_x: i32,

    /// Vertical offset between cards of a vertically fanned pile.
    pub fan_y: i32,

    /// Width of the playing surface.
    pub surface_width: i32,

    /// Height of the playing surface.
    pub surface_height: i32,

    /// RNG seed for the deal. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            card_width: 73,
            card_height: 97,
            fan_x: 12,
            fan_y: 18,
            surface_width: 700,
            surface_height: 600,
            seed: None,
        }
    }
}

impl TableConfig {
    /// Use a fixed seed so deals are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the card image size.
    #[must_use]
    pub fn with_card_size(mut self, width: i32, height: i32) -> Self {
        self.card_width = width;
        self.card_height = height;
        self
    }

    /// Set the fan-out offsets.
    #[must_use]
    pub fn with_fan_offsets(mut self, fan_x: i32, fan_y: i32) -> Self {
        self.fan_x = fan_x;
        self.fan_y = fan_y;
        self
    }

    /// Set the playing surface size.
    #[must_use]
    pub fn with_surface(mut self, width: i32, height: i32) -> Self {
        self.surface_width = width;
        self.surface_height = height;
        self
    }

    /// Check whether a point lies on the playing surface.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        (0..self.surface_width).contains(&point.x) && (0..self.surface_height).contains(&point.y)
    }
}
