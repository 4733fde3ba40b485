//! Raw gamepad events.
//!
//! The frontend reports input as small, code-addressed deltas ([`GamepadEvent`]).
//! [`InputManager::dispatch`](crate::manager::InputManager::dispatch) routes them
//! to the button or analog factory.
//!
//! ## Value conventions
//! - **Buttons:** `pressed` is the new level, not an edge; repeating a press is harmless.
//! - **Sticks:** `x`/`y` are normalized to `[-1.0, 1.0]`, `y` positive **up**.
//!
//! ### Frontend y axis
//! Android reports stick `y` positive-down. Use [`GamepadEvent::from_frontend_axis`]
//! for values straight from the platform; it flips `y`. [`GamepadEvent::axis`]
//! takes values that are already positive-up.

use crate::codes::LogicalCode;

/// One input change reported by the frontend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GamepadEvent {
    /// A digital control changed level.
    Button { code: LogicalCode, pressed: bool },

    /// A stick moved. Both axes arrive together.
    Axis { code: LogicalCode, x: f32, y: f32 },
}

impl GamepadEvent {
    pub fn button(code: LogicalCode, pressed: bool) -> Self {
        Self::Button { code, pressed }
    }

    /// Stick event with positive-up `y`.
    pub fn axis(code: LogicalCode, x: f32, y: f32) -> Self {
        Self::Axis { code, x, y }
    }

    /// Stick event from raw platform values (positive-down `y`).
    pub fn from_frontend_axis(code: LogicalCode, x: f32, y: f32) -> Self {
        Self::Axis { code, x, y: -y }
    }

    pub fn code(&self) -> LogicalCode {
        match *self {
            Self::Button { code, .. } | Self::Axis { code, .. } => code,
        }
    }
}
