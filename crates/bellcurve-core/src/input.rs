//! Input events for the interactive chart
//!
//! A small, platform-neutral vocabulary that front ends translate their
//! native pointer, touch, keyboard and gesture events into. Coordinates are
//! surface pixels; the interaction layer subtracts the plot margins.

use serde::{Deserialize, Serialize};

/// Keys the chart responds to while focused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Step the cursor left by a fraction of σ
    Left,
    /// Step the cursor right by a fraction of σ
    Right,
    /// Jump the cursor to the mean
    Home,
    /// Reset pan/zoom
    End,
    /// Clear the cursor
    Escape,
    /// Anything else, ignored
    Other,
}

/// Event delivered to the interaction state machine
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Mouse moved over the surface
    PointerMove { x: f64, y: f64 },

    /// Mouse left the surface
    PointerLeave,

    /// Finger moved on the surface
    TouchMove { x: f64, y: f64 },

    /// Finger lifted
    TouchEnd,

    /// Key pressed
    Key(Key),

    /// Surface gained keyboard focus
    Focus,

    /// Surface lost keyboard focus
    Blur,

    /// Zoom step (wheel notch or pinch update), `factor > 1` zooms in
    Zoom { factor: f64, anchor_x: f64 },

    /// Horizontal drag step
    Pan { dx: f64 },

    /// Pinch, drag or wheel burst finished
    GestureEnd,

    /// Restore the identity transform
    ResetView,
}

impl InputEvent {
    /// Get position for events that have one
    pub fn position(&self) -> Option<(f64, f64)> {
        match self {
            InputEvent::PointerMove { x, y } | InputEvent::TouchMove { x, y } => Some((*x, *y)),
            _ => None,
        }
    }

    /// Whether this event belongs to a pan/zoom gesture
    pub fn is_gesture(&self) -> bool {
        matches!(
            self,
            InputEvent::Zoom { .. } | InputEvent::Pan { .. } | InputEvent::GestureEnd
        )
    }
}
