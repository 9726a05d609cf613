//! Surface coordinates and pile fan-out.

use serde::{Deserialize, Serialize};

use super::config::TableConfig;

/// A point on the playing surface, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by the given amounts, clamped to the
    /// coordinate range.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Displacement from `origin` to this point, clamped to the coordinate
    /// range.
    #[must_use]
    pub const fn delta_from(self, origin: Point) -> (i32, i32) {
        (self.x.saturating_sub(origin.x), self.y.saturating_sub(origin.y))
    }
}

/// How successive cards in a stack are offset from one another.
///
/// Besides the visual layout, the fan-out decides which card a pointer
/// coordinate selects: a squared pile always selects its top card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FanOut {
    /// Cards sit exactly on top of each other.
    #[default]
    Squared,
    /// Each card is shifted right of the one below.
    Horizontal,
    /// Each card is shifted down from the one below.
    Vertical,
}

impl FanOut {
    /// Per-card `(x, y)` offsets for this fan-out under the given config.
    #[must_use]
    pub fn offsets(self, config: &TableConfig) -> (i32, i32) {
        match self {
            FanOut::Squared => (0, 0),
            FanOut::Horizontal => (config.fan_x, 0),
            FanOut::Vertical => (0, config.fan_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_delta() {
        let a = Point::new(10, 20);
        let b = a.offset(5, -3);

        assert_eq!(b, Point::new(15, 17));
        assert_eq!(b.delta_from(a), (5, -3));
    }

    #[test]
    fn test_extreme_coordinates_clamp() {
        let far = Point::new(i32::MIN, i32::MAX);

        assert_eq!(far.delta_from(Point::new(10, -10)), (i32::MIN, i32::MAX));
        assert_eq!(far.offset(-1, 1), far);
        assert_eq!(Point::new(i32::MAX, 0).delta_from(Point::new(-5, 0)), (i32::MAX, 0));
    }

    #[test]
    fn test_fan_offsets() {
        let config = TableConfig::default();

        assert_eq!(FanOut::Squared.offsets(&config), (0, 0));
        assert_eq!(FanOut::Horizontal.offsets(&config), (config.fan_x, 0));
        assert_eq!(FanOut::Vertical.offsets(&config), (0, config.fan_y));
    }
}
