//! Per-window input state.
//!
//! One `WindowInput` exists per native window the adapter listens to. The
//! native callbacks are producers, poll is the single consumer:
//!
//! ```text
//! key callback    ──► keys  (mpsc FIFO) ──┐
//! button callback ──► mouse (mpsc FIFO) ──┼──► poll ──► InputTarget
//! cursor callback ──► pointer.{x, y} ─────┤
//! scroll callback ──► pointer.wheel ──────┘   (wheel reset after poll)
//! ```

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crossbeam_channel::{Receiver, Sender};

use super::events::{KeyEvent, MouseEvent};
use super::native::{
    CursorPosCallback, KeyCallback, MouseButtonCallback, ScrollCallback, WindowHandle,
};

// =============================================================================
// CHAINED CALLBACKS
// =============================================================================

/// Callbacks that were installed on the window before the adapter.
///
/// Each slot is written once, right after registration returns the
/// previous callback. An empty slot means nothing to chain to.
#[derive(Default)]
pub struct Chained {
    pub cursor_pos: OnceLock<CursorPosCallback>,
    pub mouse_button: OnceLock<MouseButtonCallback>,
    pub key: OnceLock<KeyCallback>,
    pub scroll: OnceLock<ScrollCallback>,
}

// =============================================================================
// POINTER STATE
// =============================================================================

/// Sampled cursor position and the scroll accumulated since the last poll.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
    pub wheel: f64,
}

// =============================================================================
// WINDOW INPUT
// =============================================================================

pub struct WindowInput {
    handle: WindowHandle,
    pub(crate) chained: Chained,
    key_tx: Sender<KeyEvent>,
    key_rx: Receiver<KeyEvent>,
    mouse_tx: Sender<MouseEvent>,
    mouse_rx: Receiver<MouseEvent>,
    pointer: Mutex<Pointer>,
}

impl WindowInput {
    pub fn new(handle: WindowHandle) -> Self {
        let (key_tx, key_rx) = crossbeam_channel::unbounded();
        let (mouse_tx, mouse_rx) = crossbeam_channel::unbounded();
        Self {
            handle,
            chained: Chained::default(),
            key_tx,
            key_rx,
            mouse_tx,
            mouse_rx,
            pointer: Mutex::new(Pointer::default()),
        }
    }

    pub fn handle(&self) -> WindowHandle {
        self.handle
    }

    fn pointer(&self) -> MutexGuard<'_, Pointer> {
        self.pointer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Producer side (callback threads)
    // -------------------------------------------------------------------------

    pub fn push_key(&self, event: KeyEvent) {
        // Both channel ends live in `self`, so the send cannot fail.
        let _ = self.key_tx.send(event);
    }

    /// Queue a button event at the last recorded cursor position.
    pub fn push_button(&self, button: i32, pressed: bool) -> MouseEvent {
        let Pointer { x, y, .. } = *self.pointer();
        let event = MouseEvent::new(button, pressed, x, y);
        let _ = self.mouse_tx.send(event);
        event
    }

    pub fn set_cursor(&self, x: f64, y: f64) {
        let mut pointer = self.pointer();
        pointer.x = x;
        pointer.y = y;
    }

    pub fn add_wheel(&self, dy: f64) {
        self.pointer().wheel += dy;
    }

    // -------------------------------------------------------------------------
    // Consumer side (poll)
    // -------------------------------------------------------------------------

    /// Remove every key event queued so far, oldest first.
    ///
    /// Events arriving while the drain runs are left for the next poll.
    pub fn drain_keys(&self) -> impl Iterator<Item = KeyEvent> + '_ {
        let pending = self.key_rx.len();
        self.key_rx.try_iter().take(pending)
    }

    /// Remove every mouse event queued so far, oldest first.
    pub fn drain_mouse(&self) -> impl Iterator<Item = MouseEvent> + '_ {
        let pending = self.mouse_rx.len();
        self.mouse_rx.try_iter().take(pending)
    }

    /// Return the accumulated scroll and reset it to zero.
    pub fn take_wheel(&self) -> f64 {
        std::mem::take(&mut self.pointer().wheel)
    }

    pub fn cursor(&self) -> (f64, f64) {
        let pointer = self.pointer();
        (pointer.x, pointer.y)
    }

    /// Queued `(key, mouse)` event counts.
    pub fn pending(&self) -> (usize, usize) {
        (self.key_rx.len(), self.mouse_rx.len())
    }
}

impl std::fmt::Debug for WindowInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowInput")
            .field("handle", &self.handle)
            .field("pending", &self.pending())
            .field("pointer", &*self.pointer())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
