//! Input model: modifier keys, buttons, gestures and the gesture state machine.
//!
//! The host forwards raw DOM events as [`Gesture`]s, in the order it received
//! them. `InputState` is the pointer gesture being tracked between
//! pointer-down and pointer-up; the two-finger pinch is tracked separately
//! because it runs alongside whatever the primary pointer is doing.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl or Cmd turns the wheel into a zoom control.
    #[must_use]
    pub fn zooms_wheel(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger touch).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
    /// Any other DOM button code (back, forward, pen eraser, unknown).
    Other(i16),
}

impl Button {
    /// Map a DOM `PointerEvent.button` value.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// What the pointer landed on, as far as the host's DOM is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerTarget {
    /// The board surface itself (cards included).
    #[default]
    Canvas,
    /// An element carrying the interactive marker (HUD buttons, dialogs).
    Control,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Direction of a zoom-button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// One input event, in the coordinate space of the canvas element (CSS pixels).
#[derive(Debug, Clone)]
pub enum Gesture {
    PointerDown { screen: Point, button: Button, target: PointerTarget },
    PointerMove { screen: Point },
    PointerUp { screen: Point },
    PointerLeave,
    /// Current positions of every active touch point.
    TouchMove { touches: Vec<Point> },
    /// A touch ended; `remaining` points are still down.
    TouchEnd { remaining: usize },
    Wheel { delta: WheelDelta, modifiers: Modifiers },
    ZoomButton(ZoomDirection),
}

/// Internal state for the pointer state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Pressed on a card and not moved yet. Releasing here activates the card;
    /// any movement turns the press into a pan.
    Pressing {
        /// Index of the pressed card in the displayed sequence.
        index: usize,
        /// Id of the pressed post, to detect the sequence changing mid-press.
        post_id: String,
        /// Screen-space position of the press.
        last_screen: Point,
    },
    /// Dragging the board.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute pan delta.
        last_screen: Point,
    },
}

impl InputState {
    /// The camera is being (or may be about to be) dragged.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Two-finger pinch tracking.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinchState {
    /// Finger distance at the previous two-finger frame, if the pinch is live.
    pub last_distance: Option<f64>,
}

impl PinchState {
    /// Feed the current touch points. Returns the distance change since the
    /// previous two-finger frame.
    ///
    /// Fewer than two fingers drops the reference distance. Three or more
    /// fingers are not a pinch and leave the reference untouched.
    pub fn track(&mut self, touches: &[Point]) -> Option<f64> {
        match touches {
            [a, b] => {
                let distance = a.distance(*b);
                let delta = self.last_distance.map(|last| distance - last);
                self.last_distance = Some(distance);
                delta
            }
            [] | [_] => {
                self.last_distance = None;
                None
            }
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.last_distance = None;
    }
}
