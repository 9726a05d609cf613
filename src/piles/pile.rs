//! Piles: named, positioned card stacks with an attached strategy.

use std::rc::Rc;

use super::packet::Packet;
use crate::cards::{Card, CardStack};
use crate::core::{EngineResult, FanOut, PileConfig, PileId, PileTag, Point, TableConfig};
use crate::rules::PileStrategy;

/// A stack of cards on the table.
///
/// A pile's identity is stable for the life of a game; only its contents
/// change. Legality questions are delegated to its strategy.
pub struct Pile {
    id: PileId,
    name: String,
    tag: PileTag,
    position: Point,
    fan: FanOut,
    x_offset: i32,
    y_offset: i32,
    card_width: i32,
    card_height: i32,
    stack: CardStack,
    strategy: Rc<dyn PileStrategy>,
}

impl std::fmt::Debug for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("position", &self.position)
            .field("fan", &self.fan)
            .field("stack", &self.stack)
            .finish_non_exhaustive()
    }
}

impl Pile {
    pub(crate) fn new(
        id: PileId,
        config: PileConfig,
        table: &TableConfig,
        strategy: Rc<dyn PileStrategy>,
    ) -> Self {
        let (x_offset, y_offset) = config.fan.offsets(table);
        Self {
            id,
            name: config.name,
            tag: config.tag,
            position: config.position,
            fan: config.fan,
            x_offset,
            y_offset,
            card_width: table.card_width,
            card_height: table.card_height,
            stack: CardStack::new(),
            strategy,
        }
    }

    #[must_use]
    pub fn id(&self) -> PileId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn tag(&self) -> PileTag {
        self.tag
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.position.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.position.y
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    #[must_use]
    pub fn fan(&self) -> FanOut {
        self.fan
    }

    /// Horizontal pixel offset between successive cards.
    #[must_use]
    pub fn x_offset(&self) -> i32 {
        self.x_offset
    }

    /// Vertical pixel offset between successive cards.
    #[must_use]
    pub fn y_offset(&self) -> i32 {
        self.y_offset
    }

    // === Contents ===

    #[must_use]
    pub fn stack(&self) -> &CardStack {
        &self.stack
    }

    pub(crate) fn stack_mut(&mut self) -> &mut CardStack {
        &mut self.stack
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.stack.size()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn top(&self) -> EngineResult<&Card> {
        self.stack.top()
    }

    pub fn bottom(&self) -> EngineResult<&Card> {
        self.stack.bottom()
    }

    pub fn from_top(&self, index: usize) -> EngineResult<&Card> {
        self.stack.from_top(index)
    }

    /// The strategy deciding this pile's rules.
    #[must_use]
    pub fn strategy(&self) -> Rc<dyn PileStrategy> {
        Rc::clone(&self.strategy)
    }

    // === Legality ===

    /// Whether anything may be dragged off this pile right now.
    ///
    /// Cheap and side-effect free: called on every hover.
    #[must_use]
    pub fn can_drag(&self) -> bool {
        !self.stack.is_empty() && self.strategy.check_can_drag(self)
    }

    /// Whether `packet` may be dropped on this pile.
    #[must_use]
    pub fn can_drop(&self, packet: &Packet) -> bool {
        self.strategy.check_can_drop(self, packet)
    }

    // === Hit testing ===

    /// Width and height covered by this pile's cards.
    ///
    /// An empty pile still covers one card (its placeholder).
    #[must_use]
    pub fn extent(&self) -> (i32, i32) {
        let extra = self.stack.size().saturating_sub(1) as i32;
        (
            self.card_width + self.x_offset * extra,
            self.card_height + self.y_offset * extra,
        )
    }

    /// Whether `point` falls on this pile.
    #[must_use]
    pub fn under_mouse(&self, point: Point) -> bool {
        let (width, height) = self.extent();
        let (dx, dy) = point.delta_from(self.position);
        (0..width).contains(&dx) && (0..height).contains(&dy)
    }

    /// Map a pointer position to the 0-based index of the selected card.
    ///
    /// Positions past the last card select the top card, and an axis with
    /// no offset always selects the top card. `None` for an empty pile.
    #[must_use]
    pub fn identify_selection(&self, point: Point) -> Option<usize> {
        let top = self.stack.size().checked_sub(1)?;
        let (dx, dy) = point.delta_from(self.position);

        let along = |delta: i32, offset: i32| -> usize {
            if offset == 0 {
                top
            } else {
                ((delta.max(0) / offset) as usize).min(top)
            }
        };

        Some(along(dx, self.x_offset).min(along(dy, self.y_offset)))
    }

    /// Number of cards from the selected one up to the top; 0 if empty.
    #[must_use]
    pub fn count_selected(&self, point: Point) -> usize {
        self.identify_selection(point)
            .map_or(0, |index| self.stack.size() - index)
    }

    /// Where the card at `index` is drawn.
    #[must_use]
    pub fn card_position(&self, index: usize) -> Point {
        let index = index as i32;
        self.position.offset(index * self.x_offset, index * self.y_offset)
    }
}
