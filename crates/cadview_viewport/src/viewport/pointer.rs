//! Pointer positions, buttons, and the click/drag latch.

use std::ops::BitOr;

/// Widget-local pixel position, Y growing downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for ScreenPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Additional buttons (back, forward, etc.)
    Other(u8),
}

/// Set of buttons held during a move event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MouseButtons(u32);

impl MouseButtons {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(1 << 1);
    pub const MIDDLE: Self = Self(1 << 2);

    fn bit(button: MouseButton) -> u32 {
        match button {
            MouseButton::Left => Self::LEFT.0,
            MouseButton::Right => Self::RIGHT.0,
            MouseButton::Middle => Self::MIDDLE.0,
            MouseButton::Other(n) => 1 << (3 + u32::from(n.min(28))),
        }
    }

    pub fn with(self, button: MouseButton) -> Self {
        Self(self.0 | Self::bit(button))
    }

    pub fn contains(self, button: MouseButton) -> bool {
        self.0 & Self::bit(button) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The held button if exactly one of left, middle or right is down
    /// and nothing else is.
    pub fn single(self) -> Option<MouseButton> {
        match self {
            Self::LEFT => Some(MouseButton::Left),
            Self::MIDDLE => Some(MouseButton::Middle),
            Self::RIGHT => Some(MouseButton::Right),
            _ => None,
        }
    }
}

impl From<MouseButton> for MouseButtons {
    fn from(button: MouseButton) -> Self {
        Self::NONE.with(button)
    }
}

impl BitOr for MouseButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Pointer history used to derive drag deltas and gate click selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointerTrack {
    /// Position of the last press, move or release
    pub previous: ScreenPoint,
    /// Position of the last left press
    pub press: ScreenPoint,
    /// Whether the current left press may still resolve into a pick
    pub pending_selection: bool,
}

impl PointerTrack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a left press/release cycle.
    pub fn arm(&mut self, pos: ScreenPoint) {
        self.press = pos;
        self.previous = pos;
        self.pending_selection = true;
    }

    /// Whether `pos` is further than `threshold` pixels from the press on
    /// either axis.
    pub fn exceeds_threshold(&self, pos: ScreenPoint, threshold: i32) -> bool {
        let threshold = threshold.max(0).unsigned_abs();
        pos.x.abs_diff(self.press.x) > threshold || pos.y.abs_diff(self.press.y) > threshold
    }

    /// Cancel the pending pick for the rest of this cycle.
    pub fn disarm(&mut self) {
        self.pending_selection = false;
    }

    /// Consume the pending pick, leaving the latch cleared.
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending_selection)
    }
}
