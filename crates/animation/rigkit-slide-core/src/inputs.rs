//! Input contracts for the slide operator.
//!
//! Adapters translate host events into [`InputEvent`] and feed them to
//! `SlideKeyframes::modal()` in delivery order.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer moved; `x` is the horizontal coordinate in region pixels.
    PointerMove { x: f32 },
    /// Primary button.
    Confirm,
    /// Secondary button or Escape.
    Cancel,
    /// Anything else; the gesture keeps running.
    Other,
}

/// Modifier-qualified key used to invoke the operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keybinding {
    pub key: char,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

/// Shift+Alt+S.
pub const DEFAULT_KEYBINDING: Keybinding = Keybinding {
    key: 'S',
    shift: true,
    ctrl: false,
    alt: true,
};
