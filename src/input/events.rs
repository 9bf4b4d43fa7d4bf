//! Captured input events.
//!
//! Built on the callback thread, queued, and consumed by poll. Both are
//! plain immutable values.

use super::keys::Key;
use super::native::{Action, Modifiers, NativeKey};
use super::translate::{key_char, translate_key};

/// A translated key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    /// `'\0'` when the key produces no text.
    pub character: char,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn new(key: Key, character: char, pressed: bool) -> Self {
        Self { key, character, pressed }
    }

    /// Translate a raw native key callback. `None` for `KEY_UNKNOWN`.
    pub fn from_native(code: NativeKey, action: Action, mods: Modifiers) -> Option<Self> {
        if code == super::native::KEY_UNKNOWN {
            return None;
        }
        let shift = mods.contains(Modifiers::SHIFT);
        Some(Self::new(translate_key(code), key_char(code, shift), action.is_pressed()))
    }
}

/// A mouse button event, stamped with the cursor position at the time it
/// was captured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub button: i32,
    pub pressed: bool,
    pub x: f64,
    pub y: f64,
}

impl MouseEvent {
    pub fn new(button: i32, pressed: bool, x: f64, y: f64) -> Self {
        Self { button, pressed, x, y }
    }
}
