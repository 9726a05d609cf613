//! Input events and the observable interaction state.

use serde::{Deserialize, Serialize};

use crate::core::Point;

/// A pointer event forwarded by the windowing layer, in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Button pressed.
    Press(Point),
    /// Pointer moved (with or without the button held).
    Move(Point),
    /// Button released.
    Release(Point),
    /// Pointer left the playing surface.
    Exit,
}

/// Cursor the windowing layer should show over a point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorHint {
    #[default]
    Default,
    /// The pile under the pointer has something that can be dragged.
    Grab,
}

/// Where the controller is in a gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Button down, no drag started yet.
    PressPending,
    /// A packet is being dragged.
    Dragging,
}
