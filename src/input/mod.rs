//! Window input capture — native callbacks → per-window queues → toolkit.
//!
//! The windowing library delivers input through per-window callbacks on
//! whatever thread it likes. The GUI toolkit wants key, mouse and wheel
//! calls once per frame, in its own key vocabulary. This module sits in
//! between.
//!
//! # Architecture
//!
//! ```text
//! WindowSystem callbacks (any thread)
//!        │  chain to previous callback, then record
//!        ▼
//!   Registry: WindowHandle → WindowInput
//!        │        keys / mouse FIFOs, cursor, wheel
//!        ▼
//!   InputAdapter::poll (frame thread)
//!        │  translate (native key → Key, char)
//!        ▼
//!   InputTarget: handle_key / handle_mouse / handle_mouse_wheel
//! ```

pub mod adapter;
pub mod events;
pub mod keys;
pub mod native;
pub mod translate;
pub mod window;

pub use adapter::{AdapterConfig, InputAdapter, InputTarget, PollOutcome};
pub use events::{KeyEvent, MouseEvent};
pub use keys::Key;
pub use native::{
    Action, CursorPosCallback, KeyCallback, Modifiers, MouseButtonCallback, NativeKey,
    ScrollCallback, WindowHandle, WindowSystem,
};
pub use translate::{key_char, table_entries, translate_key, KeyMapping, NO_CHAR};
pub use window::WindowInput;
