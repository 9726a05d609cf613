//! The pointer-driven interaction state machine.
//!
//! ## States
//!
//! ```text
//! Idle --press--> PressPending --move, pile can drag--> Dragging
//!                      |                                   |
//!                   release                             release / exit
//!                      v                                   v
//!                    click                     drop, cancel, or cancel + click
//! ```
//!
//! A release over the origin before the pointer ever entered another pile
//! is a click, not a drop: the packet goes home and the origin's strategy
//! handles the click. Once the pointer has been over another pile, the
//! origin is an ordinary drop target. Every gesture ends back in `Idle` within the event
//! that finished it.

use std::collections::VecDeque;
use std::mem;

use tracing::{debug, info};

use super::event::{CursorHint, InteractionState, PointerEvent};
use super::state::Table;
use crate::core::{EngineError, EngineResult, PileId, Point, TableConfig};
use crate::moves::Notifications;
use crate::piles::{drop_packet, start_drag, Packet};
use crate::rules::{Game, Notification};

#[derive(Debug)]
enum Gesture {
    Idle,
    Pressed {
        anchor: Point,
        /// The pile under the anchor refused to let go; the rest of the
        /// gesture can only be a click.
        refused: bool,
    },
    Dragging {
        packet: Packet,
        anchor: Point,
        last: Point,
        /// The pointer has been over a pile other than the origin.
        definite: bool,
    },
}

/// Turns raw pointer events into clicks, drags and drops on a `Table`.
#[derive(Debug)]
pub struct TableController {
    table: Table,
    gesture: Gesture,
    highlight: Option<PileId>,
    notifications: VecDeque<Notification>,
}

impl TableController {
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        Self::with_table(Table::new(config))
    }

    #[must_use]
    pub fn with_table(table: Table) -> Self {
        Self {
            table,
            gesture: Gesture::Idle,
            highlight: None,
            notifications: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Set up `game` and deal it. Allowed once per controller.
    pub fn start<G: Game + ?Sized>(&mut self, game: &mut G) -> EngineResult<()> {
        self.table.start(game)
    }

    /// Feed one pointer event.
    pub fn handle(&mut self, event: PointerEvent) -> EngineResult<()> {
        match event {
            PointerEvent::Press(point) => self.press(point),
            PointerEvent::Move(point) => self.drag(point),
            PointerEvent::Release(point) => self.release(point),
            PointerEvent::Exit => self.exit(),
        }
    }

    pub fn press(&mut self, point: Point) -> EngineResult<()> {
        if let Gesture::Dragging { packet, .. } = mem::replace(&mut self.gesture, Gesture::Idle) {
            self.cancel(packet)?;
        }
        debug!(x = point.x, y = point.y, "press");
        self.gesture = Gesture::Pressed {
            anchor: point,
            refused: false,
        };
        Ok(())
    }

    pub fn drag(&mut self, point: Point) -> EngineResult<()> {
        if !self.table.config().contains(point) {
            return self.exit();
        }

        match mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Idle => {}
            Gesture::Pressed { anchor, refused } => {
                let packet = if refused { None } else { self.begin_drag(anchor)? };
                match packet {
                    Some(packet) => {
                        self.gesture = Gesture::Dragging {
                            packet,
                            anchor,
                            last: anchor,
                            definite: false,
                        };
                        self.track(point);
                    }
                    None => {
                        self.gesture = Gesture::Pressed {
                            anchor,
                            refused: true,
                        };
                    }
                }
            }
            dragging @ Gesture::Dragging { .. } => {
                self.gesture = dragging;
                self.track(point);
            }
        }
        Ok(())
    }

    pub fn release(&mut self, point: Point) -> EngineResult<()> {
        match mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Idle => Ok(()),
            Gesture::Pressed { .. } => self.click(point),
            Gesture::Dragging {
                packet,
                anchor,
                definite,
                ..
            } => {
                self.highlight = None;
                let origin = packet.origin();
                match self.table.piles().find_at(point) {
                    Some(target) if target == origin && !definite => {
                        self.cancel(packet)?;
                        self.click(anchor)
                    }
                    Some(target) => self.drop_on(packet, target),
                    None => self.cancel(packet),
                }
            }
        }
    }

    /// The pointer left the playing surface. An active drag never survives
    /// this.
    pub fn exit(&mut self) -> EngineResult<()> {
        match mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Dragging { packet, .. } => {
                self.highlight = None;
                debug!("pointer left the surface");
                self.cancel(packet)
            }
            _ => Ok(()),
        }
    }

    // === Observers ===

    /// The packet being dragged, for drawing.
    #[must_use]
    pub fn dragged_packet(&self) -> Option<&Packet> {
        match &self.gesture {
            Gesture::Dragging { packet, .. } => Some(packet),
            _ => None,
        }
    }

    /// The pile that would accept the current drag if released now.
    #[must_use]
    pub fn highlighted(&self) -> Option<PileId> {
        self.highlight
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        match self.gesture {
            Gesture::Idle => InteractionState::Idle,
            Gesture::Pressed { .. } => InteractionState::PressPending,
            Gesture::Dragging { .. } => InteractionState::Dragging,
        }
    }

    /// Cursor to show while hovering at `point`.
    #[must_use]
    pub fn cursor_at(&self, point: Point) -> CursorHint {
        let piles = self.table.piles();
        match piles.find_at(point).and_then(|id| piles.get(id).ok()) {
            Some(pile) if pile.can_drag() => CursorHint::Grab,
            _ => CursorHint::Default,
        }
    }

    // === History ===

    pub fn undo(&mut self) -> EngineResult<()> {
        self.ensure_not_dragging()?;
        self.table.undo()
    }

    pub fn redo(&mut self) -> EngineResult<()> {
        self.ensure_not_dragging()?;
        self.table.redo()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.table.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.table.can_redo()
    }

    /// Take the next pending notification, oldest first.
    pub fn poll_notification(&mut self) -> Option<Notification> {
        self.notifications.pop_front()
    }

    // === Internals ===

    fn ensure_not_dragging(&self) -> EngineResult<()> {
        match self.gesture {
            Gesture::Dragging { .. } => Err(EngineError::GestureInProgress),
            _ => Ok(()),
        }
    }

    fn begin_drag(&mut self, anchor: Point) -> EngineResult<Option<Packet>> {
        let Some(id) = self.table.piles().find_at(anchor) else {
            return Ok(None);
        };
        let pile = self.table.pile(id)?;
        if !pile.can_drag() {
            debug!(pile = %id, "drag refused");
            return Ok(None);
        }

        let count = pile.count_selected(anchor);
        let packet = start_drag(self.table.piles_mut(), id, count, true)?;
        match &packet {
            Some(_) => debug!(pile = %id, count, "drag started"),
            None => debug!(pile = %id, count, "selection refused"),
        }
        Ok(packet)
    }

    fn track(&mut self, point: Point) {
        let Gesture::Dragging {
            packet,
            last,
            definite,
            ..
        } = &mut self.gesture
        else {
            return;
        };

        let (dx, dy) = point.delta_from(*last);
        packet.translate(dx, dy);
        *last = point;

        let piles = self.table.piles();
        let hovered = piles.find_at(point).filter(|&id| id != packet.origin());
        if hovered.is_some() {
            *definite = true;
        }
        self.highlight = hovered.filter(|&id| piles.get(id).is_ok_and(|pile| pile.can_drop(packet)));
    }

    fn cancel(&mut self, packet: Packet) -> EngineResult<()> {
        debug!(pile = %packet.origin(), count = packet.size(), "drag cancelled");
        packet.cancel_drag(self.table.piles_mut())
    }

    fn drop_on(&mut self, packet: Packet, target: PileId) -> EngineResult<()> {
        let origin = packet.origin();
        let count = packet.size();
        let mut dropped = false;
        let notifications = self.table.transact(|mover| {
            dropped = drop_packet(packet, target, mover)?;
            Ok(())
        })?;
        debug!(origin = %origin, target = %target, count, dropped, "drop");
        self.queue(notifications);
        Ok(())
    }

    fn click(&mut self, point: Point) -> EngineResult<()> {
        let Some(id) = self.table.piles().find_at(point) else {
            return Ok(());
        };
        let pile = self.table.pile(id)?;
        let selected = pile.count_selected(point);
        let strategy = pile.strategy();

        debug!(pile = %id, selected, "click");
        let notifications = self
            .table
            .transact(|mover| strategy.handle_click(id, selected, mover))?;
        self.queue(notifications);
        Ok(())
    }

    fn queue(&mut self, notifications: Notifications) {
        for notification in notifications {
            match notification {
                Notification::Won => info!("game won"),
            }
            self.notifications.push_back(notification);
        }
    }
}
