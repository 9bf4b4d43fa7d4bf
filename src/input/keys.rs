//! Toolkit key vocabulary.
//!
//! The GUI side identifies keys by the classic LWJGL keyboard numbering.
//! `Key::NONE` (0) is a valid key identity and is what every unmapped native
//! key degrades to.

use std::fmt;

/// A key code in the toolkit's vocabulary.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Key(pub u16);

impl Key {
    pub const NONE: Key = Key(0x00);

    pub const ESCAPE: Key = Key(0x01);
    pub const KEY_1: Key = Key(0x02);
    pub const KEY_2: Key = Key(0x03);
    pub const KEY_3: Key = Key(0x04);
    pub const KEY_4: Key = Key(0x05);
    pub const KEY_5: Key = Key(0x06);
    pub const KEY_6: Key = Key(0x07);
    pub const KEY_7: Key = Key(0x08);
    pub const KEY_8: Key = Key(0x09);
    pub const KEY_9: Key = Key(0x0A);
    pub const KEY_0: Key = Key(0x0B);
    pub const MINUS: Key = Key(0x0C);
    pub const EQUALS: Key = Key(0x0D);
    pub const BACK: Key = Key(0x0E);
    pub const TAB: Key = Key(0x0F);
    pub const Q: Key = Key(0x10);
    pub const W: Key = Key(0x11);
    pub const E: Key = Key(0x12);
    pub const R: Key = Key(0x13);
    pub const T: Key = Key(0x14);
    pub const Y: Key = Key(0x15);
    pub const U: Key = Key(0x16);
    pub const I: Key = Key(0x17);
    pub const O: Key = Key(0x18);
    pub const P: Key = Key(0x19);
    pub const LBRACKET: Key = Key(0x1A);
    pub const RBRACKET: Key = Key(0x1B);
    pub const RETURN: Key = Key(0x1C);
    pub const LCONTROL: Key = Key(0x1D);
    pub const A: Key = Key(0x1E);
    pub const S: Key = Key(0x1F);
    pub const D: Key = Key(0x20);
    pub const F: Key = Key(0x21);
    pub const G: Key = Key(0x22);
    pub const H: Key = Key(0x23);
    pub const J: Key = Key(0x24);
    pub const K: Key = Key(0x25);
    pub const L: Key = Key(0x26);
    pub const SEMICOLON: Key = Key(0x27);
    pub const APOSTROPHE: Key = Key(0x28);
    pub const GRAVE: Key = Key(0x29);
    pub const LSHIFT: Key = Key(0x2A);
    pub const BACKSLASH: Key = Key(0x2B);
    pub const Z: Key = Key(0x2C);
    pub const X: Key = Key(0x2D);
    pub const C: Key = Key(0x2E);
    pub const V: Key = Key(0x2F);
    pub const B: Key = Key(0x30);
    pub const N: Key = Key(0x31);
    pub const M: Key = Key(0x32);
    pub const COMMA: Key = Key(0x33);
    pub const PERIOD: Key = Key(0x34);
    pub const SLASH: Key = Key(0x35);
    pub const RSHIFT: Key = Key(0x36);
    pub const MULTIPLY: Key = Key(0x37);
    pub const LMENU: Key = Key(0x38);
    pub const SPACE: Key = Key(0x39);
    pub const CAPITAL: Key = Key(0x3A);
    pub const F1: Key = Key(0x3B);
    pub const F2: Key = Key(0x3C);
    pub const F3: Key = Key(0x3D);
    pub const F4: Key = Key(0x3E);
    pub const F5: Key = Key(0x3F);
    pub const F6: Key = Key(0x40);
    pub const F7: Key = Key(0x41);
    pub const F8: Key = Key(0x42);
    pub const F9: Key = Key(0x43);
    pub const F10: Key = Key(0x44);
    pub const NUMLOCK: Key = Key(0x45);
    pub const SCROLL: Key = Key(0x46);
    pub const NUMPAD7: Key = Key(0x47);
    pub const NUMPAD8: Key = Key(0x48);
    pub const NUMPAD9: Key = Key(0x49);
    pub const SUBTRACT: Key = Key(0x4A);
    pub const NUMPAD4: Key = Key(0x4B);
    pub const NUMPAD5: Key = Key(0x4C);
    pub const NUMPAD6: Key = Key(0x4D);
    pub const ADD: Key = Key(0x4E);
    pub const NUMPAD1: Key = Key(0x4F);
    pub const NUMPAD2: Key = Key(0x50);
    pub const NUMPAD3: Key = Key(0x51);
    pub const NUMPAD0: Key = Key(0x52);
    pub const DECIMAL: Key = Key(0x53);
    pub const F11: Key = Key(0x57);
    pub const F12: Key = Key(0x58);
    pub const NUMPADEQUALS: Key = Key(0x8D);
    pub const NUMPADENTER: Key = Key(0x9C);
    pub const RCONTROL: Key = Key(0x9D);
    pub const DIVIDE: Key = Key(0xB5);
    pub const SYSRQ: Key = Key(0xB7);
    pub const RMENU: Key = Key(0xB8);
    pub const PAUSE: Key = Key(0xC5);
    pub const HOME: Key = Key(0xC7);
    pub const UP: Key = Key(0xC8);
    pub const PRIOR: Key = Key(0xC9);
    pub const LEFT: Key = Key(0xCB);
    pub const RIGHT: Key = Key(0xCD);
    pub const END: Key = Key(0xCF);
    pub const DOWN: Key = Key(0xD0);
    pub const NEXT: Key = Key(0xD1);
    pub const INSERT: Key = Key(0xD2);
    pub const DELETE: Key = Key(0xD3);
    pub const LMETA: Key = Key(0xDB);
    pub const RMETA: Key = Key(0xDC);
    pub const APPS: Key = Key(0xDD);

    /// Raw numeric code.
    pub fn code(self) -> u16 {
        self.0
    }

    /// True for the neutral "no key" identity.
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key(0x{:02X})", self.0)
    }
}

impl From<Key> for u16 {
    fn from(key: Key) -> Self {
        key.0
    }
}
