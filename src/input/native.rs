//! Native windowing vocabulary.
//!
//! Key codes, actions and modifier bits follow GLFW's numbering so a host
//! can forward its raw callback arguments unchanged. The [`WindowSystem`]
//! trait is the seam to the windowing library itself.

use std::sync::Arc;

// =============================================================================
// WINDOW HANDLE
// =============================================================================

/// Opaque native window/context handle (the GLFW window pointer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowHandle(pub u64);

impl From<u64> for WindowHandle {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

// =============================================================================
// KEY CODES
// =============================================================================

/// Native key code as delivered by the key callback.
pub type NativeKey = i32;

pub const KEY_UNKNOWN: NativeKey = -1;

pub const KEY_SPACE: NativeKey = 32;
pub const KEY_APOSTROPHE: NativeKey = 39;
pub const KEY_COMMA: NativeKey = 44;
pub const KEY_MINUS: NativeKey = 45;
pub const KEY_PERIOD: NativeKey = 46;
pub const KEY_SLASH: NativeKey = 47;
pub const KEY_0: NativeKey = 48;
pub const KEY_1: NativeKey = 49;
pub const KEY_2: NativeKey = 50;
pub const KEY_3: NativeKey = 51;
pub const KEY_4: NativeKey = 52;
pub const KEY_5: NativeKey = 53;
pub const KEY_6: NativeKey = 54;
pub const KEY_7: NativeKey = 55;
pub const KEY_8: NativeKey = 56;
pub const KEY_9: NativeKey = 57;
pub const KEY_SEMICOLON: NativeKey = 59;
pub const KEY_EQUAL: NativeKey = 61;
pub const KEY_A: NativeKey = 65;
pub const KEY_B: NativeKey = 66;
pub const KEY_C: NativeKey = 67;
pub const KEY_D: NativeKey = 68;
pub const KEY_E: NativeKey = 69;
pub const KEY_F: NativeKey = 70;
pub const KEY_G: NativeKey = 71;
pub const KEY_H: NativeKey = 72;
pub const KEY_I: NativeKey = 73;
pub const KEY_J: NativeKey = 74;
pub const KEY_K: NativeKey = 75;
pub const KEY_L: NativeKey = 76;
pub const KEY_M: NativeKey = 77;
pub const KEY_N: NativeKey = 78;
pub const KEY_O: NativeKey = 79;
pub const KEY_P: NativeKey = 80;
pub const KEY_Q: NativeKey = 81;
pub const KEY_R: NativeKey = 82;
pub const KEY_S: NativeKey = 83;
pub const KEY_T: NativeKey = 84;
pub const KEY_U: NativeKey = 85;
pub const KEY_V: NativeKey = 86;
pub const KEY_W: NativeKey = 87;
pub const KEY_X: NativeKey = 88;
pub const KEY_Y: NativeKey = 89;
pub const KEY_Z: NativeKey = 90;
pub const KEY_LEFT_BRACKET: NativeKey = 91;
pub const KEY_BACKSLASH: NativeKey = 92;
pub const KEY_RIGHT_BRACKET: NativeKey = 93;
pub const KEY_GRAVE_ACCENT: NativeKey = 96;
pub const KEY_WORLD_1: NativeKey = 161;
pub const KEY_WORLD_2: NativeKey = 162;

pub const KEY_ESCAPE: NativeKey = 256;
pub const KEY_ENTER: NativeKey = 257;
pub const KEY_TAB: NativeKey = 258;
pub const KEY_BACKSPACE: NativeKey = 259;
pub const KEY_INSERT: NativeKey = 260;
pub const KEY_DELETE: NativeKey = 261;
pub const KEY_RIGHT: NativeKey = 262;
pub const KEY_LEFT: NativeKey = 263;
pub const KEY_DOWN: NativeKey = 264;
pub const KEY_UP: NativeKey = 265;
pub const KEY_PAGE_UP: NativeKey = 266;
pub const KEY_PAGE_DOWN: NativeKey = 267;
pub const KEY_HOME: NativeKey = 268;
pub const KEY_END: NativeKey = 269;
pub const KEY_CAPS_LOCK: NativeKey = 280;
pub const KEY_SCROLL_LOCK: NativeKey = 281;
pub const KEY_NUM_LOCK: NativeKey = 282;
pub const KEY_PRINT_SCREEN: NativeKey = 283;
pub const KEY_PAUSE: NativeKey = 284;
pub const KEY_F1: NativeKey = 290;
pub const KEY_F2: NativeKey = 291;
pub const KEY_F3: NativeKey = 292;
pub const KEY_F4: NativeKey = 293;
pub const KEY_F5: NativeKey = 294;
pub const KEY_F6: NativeKey = 295;
pub const KEY_F7: NativeKey = 296;
pub const KEY_F8: NativeKey = 297;
pub const KEY_F9: NativeKey = 298;
pub const KEY_F10: NativeKey = 299;
pub const KEY_F11: NativeKey = 300;
pub const KEY_F12: NativeKey = 301;
pub const KEY_F13: NativeKey = 302;
pub const KEY_F25: NativeKey = 314;
pub const KEY_KP_0: NativeKey = 320;
pub const KEY_KP_1: NativeKey = 321;
pub const KEY_KP_2: NativeKey = 322;
pub const KEY_KP_3: NativeKey = 323;
pub const KEY_KP_4: NativeKey = 324;
pub const KEY_KP_5: NativeKey = 325;
pub const KEY_KP_6: NativeKey = 326;
pub const KEY_KP_7: NativeKey = 327;
pub const KEY_KP_8: NativeKey = 328;
pub const KEY_KP_9: NativeKey = 329;
pub const KEY_KP_DECIMAL: NativeKey = 330;
pub const KEY_KP_DIVIDE: NativeKey = 331;
pub const KEY_KP_MULTIPLY: NativeKey = 332;
pub const KEY_KP_SUBTRACT: NativeKey = 333;
pub const KEY_KP_ADD: NativeKey = 334;
pub const KEY_KP_ENTER: NativeKey = 335;
pub const KEY_KP_EQUAL: NativeKey = 336;
pub const KEY_LEFT_SHIFT: NativeKey = 340;
pub const KEY_LEFT_CONTROL: NativeKey = 341;
pub const KEY_LEFT_ALT: NativeKey = 342;
pub const KEY_LEFT_SUPER: NativeKey = 343;
pub const KEY_RIGHT_SHIFT: NativeKey = 344;
pub const KEY_RIGHT_CONTROL: NativeKey = 345;
pub const KEY_RIGHT_ALT: NativeKey = 346;
pub const KEY_RIGHT_SUPER: NativeKey = 347;
pub const KEY_MENU: NativeKey = 348;

/// Highest valid native key code. Tables are sized `KEY_LAST + 1`.
pub const KEY_LAST: NativeKey = KEY_MENU;

// =============================================================================
// ACTIONS & MODIFIERS
// =============================================================================

/// Key/button action reported by the native callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Action {
    Release = 0,
    Press = 1,
    Repeat = 2,
}

impl Action {
    /// Map a raw action value. Anything unrecognised counts as a press,
    /// since only `Release` is distinguished downstream.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Release,
            2 => Self::Repeat,
            _ => Self::Press,
        }
    }

    /// Pressed or held.
    pub fn is_pressed(self) -> bool {
        self != Self::Release
    }
}

bitflags::bitflags! {
    /// Native modifier bit field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: i32 {
        const SHIFT     = 0x0001;
        const CONTROL   = 0x0002;
        const ALT       = 0x0004;
        const SUPER     = 0x0008;
        const CAPS_LOCK = 0x0010;
        const NUM_LOCK  = 0x0020;
    }
}

// =============================================================================
// CALLBACKS
// =============================================================================

/// `(window, x, y)`
pub type CursorPosCallback = Arc<dyn Fn(WindowHandle, f64, f64) + Send + Sync>;

/// `(window, button, action, mods)`
pub type MouseButtonCallback = Arc<dyn Fn(WindowHandle, i32, Action, Modifiers) + Send + Sync>;

/// `(window, key, scancode, action, mods)`
pub type KeyCallback = Arc<dyn Fn(WindowHandle, NativeKey, i32, Action, Modifiers) + Send + Sync>;

/// `(window, dx, dy)`
pub type ScrollCallback = Arc<dyn Fn(WindowHandle, f64, f64) + Send + Sync>;

/// The windowing library as seen by the adapter.
///
/// Every `set_*_callback` installs the given callback (or clears the slot on
/// `None`) and returns whatever was installed before, so callers can chain.
pub trait WindowSystem: Send + Sync {
    /// The window whose context is current on the calling thread, if any.
    fn current_context(&self) -> Option<WindowHandle>;

    /// Whether `window` currently has input focus.
    fn is_focused(&self, window: WindowHandle) -> bool;

    fn set_cursor_pos_callback(
        &self,
        window: WindowHandle,
        callback: Option<CursorPosCallback>,
    ) -> Option<CursorPosCallback>;

    fn set_mouse_button_callback(
        &self,
        window: WindowHandle,
        callback: Option<MouseButtonCallback>,
    ) -> Option<MouseButtonCallback>;

    fn set_key_callback(
        &self,
        window: WindowHandle,
        callback: Option<KeyCallback>,
    ) -> Option<KeyCallback>;

    fn set_scroll_callback(
        &self,
        window: WindowHandle,
        callback: Option<ScrollCallback>,
    ) -> Option<ScrollCallback>;
}

// =============================================================================
// TESTS
// =============================================================================
