//! Native key code → toolkit key/character translation.
//!
//! Two process-wide tables indexed by native key code, built once on first
//! use and read-only afterwards:
//!
//! - key code → toolkit [`Key`]
//! - key code → `[unshifted, shifted]` character (printable and numpad keys)
//!
//! Lookups never fail. Codes outside `0..=KEY_LAST` and codes without an
//! entry translate to `Key::NONE` / `'\0'`.

use std::sync::LazyLock;

use super::keys::Key;
use super::native::*;

/// The neutral character for keys that produce no text.
pub const NO_CHAR: char = '\0';

const TABLE_LEN: usize = KEY_LAST as usize + 1;

// =============================================================================
// TABLE DATA
// =============================================================================

/// One row of the translation data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMapping {
    pub native: NativeKey,
    pub key: Key,
    /// `[unshifted, shifted]`, or `None` for non-printing keys.
    pub chars: Option<[char; 2]>,
}

const fn map(native: NativeKey, key: Key, unshifted: char, shifted: char) -> KeyMapping {
    KeyMapping { native, key, chars: Some([unshifted, shifted]) }
}

const fn key_only(native: NativeKey, key: Key) -> KeyMapping {
    KeyMapping { native, key, chars: None }
}

static MAPPINGS: &[KeyMapping] = &[
    // Printable
    map(KEY_SPACE, Key::SPACE, ' ', ' '),
    map(KEY_APOSTROPHE, Key::APOSTROPHE, '\'', '"'),
    map(KEY_COMMA, Key::COMMA, ',', '<'),
    map(KEY_MINUS, Key::MINUS, '-', '_'),
    map(KEY_PERIOD, Key::PERIOD, '.', '>'),
    map(KEY_SLASH, Key::SLASH, '/', '?'),
    map(KEY_0, Key::KEY_0, '0', ')'),
    map(KEY_1, Key::KEY_1, '1', '!'),
    map(KEY_2, Key::KEY_2, '2', '@'),
    map(KEY_3, Key::KEY_3, '3', '#'),
    map(KEY_4, Key::KEY_4, '4', '$'),
    map(KEY_5, Key::KEY_5, '5', '%'),
    map(KEY_6, Key::KEY_6, '6', '^'),
    map(KEY_7, Key::KEY_7, '7', '&'),
    map(KEY_8, Key::KEY_8, '8', '*'),
    map(KEY_9, Key::KEY_9, '9', '('),
    map(KEY_SEMICOLON, Key::SEMICOLON, ';', ':'),
    map(KEY_EQUAL, Key::EQUALS, '=', '+'),
    map(KEY_A, Key::A, 'a', 'A'),
    map(KEY_B, Key::B, 'b', 'B'),
    map(KEY_C, Key::C, 'c', 'C'),
    map(KEY_D, Key::D, 'd', 'D'),
    map(KEY_E, Key::E, 'e', 'E'),
    map(KEY_F, Key::F, 'f', 'F'),
    map(KEY_G, Key::G, 'g', 'G'),
    map(KEY_H, Key::H, 'h', 'H'),
    map(KEY_I, Key::I, 'i', 'I'),
    map(KEY_J, Key::J, 'j', 'J'),
    map(KEY_K, Key::K, 'k', 'K'),
    map(KEY_L, Key::L, 'l', 'L'),
    map(KEY_M, Key::M, 'm', 'M'),
    map(KEY_N, Key::N, 'n', 'N'),
    map(KEY_O, Key::O, 'o', 'O'),
    map(KEY_P, Key::P, 'p', 'P'),
    map(KEY_Q, Key::Q, 'q', 'Q'),
    map(KEY_R, Key::R, 'r', 'R'),
    map(KEY_S, Key::S, 's', 'S'),
    map(KEY_T, Key::T, 't', 'T'),
    map(KEY_U, Key::U, 'u', 'U'),
    map(KEY_V, Key::V, 'v', 'V'),
    map(KEY_W, Key::W, 'w', 'W'),
    map(KEY_X, Key::X, 'x', 'X'),
    map(KEY_Y, Key::Y, 'y', 'Y'),
    map(KEY_Z, Key::Z, 'z', 'Z'),
    map(KEY_LEFT_BRACKET, Key::LBRACKET, '[', '{'),
    map(KEY_BACKSLASH, Key::BACKSLASH, '\\', '|'),
    map(KEY_RIGHT_BRACKET, Key::RBRACKET, ']', '}'),
    map(KEY_GRAVE_ACCENT, Key::GRAVE, '`', '~'),
    map(KEY_ENTER, Key::RETURN, '\n', '\n'),
    map(KEY_TAB, Key::TAB, '\t', '\t'),
    // Editing & navigation
    key_only(KEY_ESCAPE, Key::ESCAPE),
    key_only(KEY_BACKSPACE, Key::BACK),
    key_only(KEY_INSERT, Key::INSERT),
    key_only(KEY_DELETE, Key::DELETE),
    key_only(KEY_RIGHT, Key::RIGHT),
    key_only(KEY_LEFT, Key::LEFT),
    key_only(KEY_DOWN, Key::DOWN),
    key_only(KEY_UP, Key::UP),
    key_only(KEY_PAGE_UP, Key::PRIOR),
    key_only(KEY_PAGE_DOWN, Key::NEXT),
    key_only(KEY_HOME, Key::HOME),
    key_only(KEY_END, Key::END),
    // Locks & system
    key_only(KEY_CAPS_LOCK, Key::CAPITAL),
    key_only(KEY_SCROLL_LOCK, Key::SCROLL),
    key_only(KEY_NUM_LOCK, Key::NUMLOCK),
    key_only(KEY_PRINT_SCREEN, Key::NONE),
    key_only(KEY_PAUSE, Key::PAUSE),
    // Function keys
    key_only(KEY_F1, Key::F1),
    key_only(KEY_F2, Key::F2),
    key_only(KEY_F3, Key::F3),
    key_only(KEY_F4, Key::F4),
    key_only(KEY_F5, Key::F5),
    key_only(KEY_F6, Key::F6),
    key_only(KEY_F7, Key::F7),
    key_only(KEY_F8, Key::F8),
    key_only(KEY_F9, Key::F9),
    key_only(KEY_F10, Key::F10),
    key_only(KEY_F11, Key::F11),
    key_only(KEY_F12, Key::F12),
    // Numpad
    map(KEY_KP_0, Key::NUMPAD0, '0', '0'),
    map(KEY_KP_1, Key::NUMPAD1, '1', '1'),
    map(KEY_KP_2, Key::NUMPAD2, '2', '2'),
    map(KEY_KP_3, Key::NUMPAD3, '3', '3'),
    map(KEY_KP_4, Key::NUMPAD4, '4', '4'),
    map(KEY_KP_5, Key::NUMPAD5, '5', '5'),
    map(KEY_KP_6, Key::NUMPAD6, '6', '6'),
    map(KEY_KP_7, Key::NUMPAD7, '7', '7'),
    map(KEY_KP_8, Key::NUMPAD8, '8', '8'),
    map(KEY_KP_9, Key::NUMPAD9, '9', '9'),
    map(KEY_KP_DECIMAL, Key::DECIMAL, '.', '.'),
    map(KEY_KP_DIVIDE, Key::DIVIDE, '/', '/'),
    map(KEY_KP_MULTIPLY, Key::MULTIPLY, '*', '*'),
    map(KEY_KP_SUBTRACT, Key::SUBTRACT, '-', '-'),
    map(KEY_KP_ADD, Key::ADD, '+', '+'),
    key_only(KEY_KP_ENTER, Key::NUMPADENTER),
    map(KEY_KP_EQUAL, Key::NUMPADEQUALS, '=', '='),
    // Modifiers
    key_only(KEY_LEFT_SHIFT, Key::LSHIFT),
    key_only(KEY_LEFT_CONTROL, Key::LCONTROL),
    key_only(KEY_LEFT_ALT, Key::LMENU),
    key_only(KEY_LEFT_SUPER, Key::LMETA),
    key_only(KEY_RIGHT_SHIFT, Key::RSHIFT),
    key_only(KEY_RIGHT_CONTROL, Key::RCONTROL),
    key_only(KEY_RIGHT_ALT, Key::RMENU),
    key_only(KEY_RIGHT_SUPER, Key::RMETA),
    key_only(KEY_MENU, Key::APPS),
];

// =============================================================================
// TABLES
// =============================================================================

struct Tables {
    keys: [Key; TABLE_LEN],
    chars: [Option<[char; 2]>; TABLE_LEN],
}

static TABLES: LazyLock<Tables> = LazyLock::new(|| {
    let mut tables = Tables {
        keys: [Key::NONE; TABLE_LEN],
        chars: [None; TABLE_LEN],
    };
    for mapping in MAPPINGS {
        let slot = mapping.native as usize;
        tables.keys[slot] = mapping.key;
        tables.chars[slot] = mapping.chars;
    }
    tables
});

fn slot(code: NativeKey) -> Option<usize> {
    usize::try_from(code).ok().filter(|&i| i < TABLE_LEN)
}

// =============================================================================
// LOOKUP
// =============================================================================

/// Toolkit key for a native key code, `Key::NONE` if unmapped.
pub fn translate_key(code: NativeKey) -> Key {
    slot(code).map_or(Key::NONE, |i| TABLES.keys[i])
}

/// Character for a native key code, selecting the shifted variant when
/// `shift` is set. `NO_CHAR` for non-printing or unmapped keys.
pub fn key_char(code: NativeKey, shift: bool) -> char {
    slot(code)
        .and_then(|i| TABLES.chars[i])
        .map_or(NO_CHAR, |pair| pair[usize::from(shift)])
}

/// Every row of the translation data, in table order.
pub fn table_entries() -> &'static [KeyMapping] {
    MAPPINGS
}

// =============================================================================
// TESTS
// =============================================================================
