//! Input adapter - native callbacks in, toolkit calls out.
//!
//! The adapter owns a registry of per-window [`WindowInput`] state. The first
//! time it sees a window (on [`InputAdapter::poll`] or an explicit
//! [`InputAdapter::listen_to`]) it installs its four native callbacks,
//! keeping whatever was installed before so existing listeners keep working.
//! Callbacks only record; [`InputAdapter::poll`] drains the recorded events
//! into an [`InputTarget`] once per frame.
//!
//! # Example
//!
//! ```ignore
//! let mut adapter = InputAdapter::new(window_system);
//!
//! loop {
//!     if !adapter.poll(&mut gui).should_continue() {
//!         // focus was lost this frame
//!         continue;
//!     }
//!     gui.update();
//! }
//! ```

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, trace};

use super::events::KeyEvent;
use super::keys::Key;
use super::native::{
    Action, CursorPosCallback, KeyCallback, Modifiers, MouseButtonCallback, NativeKey,
    ScrollCallback, WindowHandle, WindowSystem,
};
use super::window::WindowInput;

// =============================================================================
// TOOLKIT SIDE
// =============================================================================

/// The GUI toolkit's input entry points.
pub trait InputTarget {
    /// `character` is `'\0'` for keys without text, `key` may be `Key::NONE`.
    fn handle_key(&mut self, key: Key, character: char, pressed: bool);

    fn handle_mouse(&mut self, x: i32, y: i32, button: i32, pressed: bool);

    fn handle_mouse_wheel(&mut self, delta: i32);
}

/// Result of one [`InputAdapter::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// No current window and none was active before.
    NoWindow,
    /// The active window lost focus (or went away) since the last poll.
    /// Queued events are kept for the next processing poll.
    BecameInactive,
    /// The current window's queues were drained into the target.
    Processed,
}

impl PollOutcome {
    /// `false` exactly on the focus-lost transition.
    pub fn should_continue(self) -> bool {
        self != Self::BecameInactive
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// Adapter settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Added to the truncated cursor y of every forwarded mouse button event.
    pub mouse_y_offset: i32,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self { mouse_y_offset: -1 }
    }
}

impl AdapterConfig {
    pub fn with_mouse_y_offset(mut self, offset: i32) -> Self {
        self.mouse_y_offset = offset;
        self
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Window handle → input state. Shared with the installed callbacks.
type Registry = RwLock<HashMap<WindowHandle, Arc<WindowInput>>>;

fn lookup(registry: &Registry, window: WindowHandle) -> Option<Arc<WindowInput>> {
    registry
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&window)
        .cloned()
}

// =============================================================================
// NATIVE CALLBACKS
// =============================================================================
//
// Each callback resolves the window, chains to the previously installed
// callback first, then records. Windows without state are ignored.

fn on_cursor_pos(registry: &Registry, window: WindowHandle, x: f64, y: f64) {
    let Some(input) = lookup(registry, window) else {
        trace!(?window, "cursor event for unknown window");
        return;
    };
    if let Some(previous) = input.chained.cursor_pos.get() {
        previous(window, x, y);
    }
    input.set_cursor(x, y);
}

fn on_mouse_button(
    registry: &Registry,
    window: WindowHandle,
    button: i32,
    action: Action,
    mods: Modifiers,
) {
    let Some(input) = lookup(registry, window) else {
        trace!(?window, "button event for unknown window");
        return;
    };
    if let Some(previous) = input.chained.mouse_button.get() {
        previous(window, button, action, mods);
    }
    let event = input.push_button(button, action.is_pressed());
    trace!(?window, ?event, "queued mouse event");
}

fn on_key(
    registry: &Registry,
    window: WindowHandle,
    key: NativeKey,
    scancode: i32,
    action: Action,
    mods: Modifiers,
) {
    let Some(input) = lookup(registry, window) else {
        trace!(?window, "key event for unknown window");
        return;
    };
    if let Some(previous) = input.chained.key.get() {
        previous(window, key, scancode, action, mods);
    }
    match KeyEvent::from_native(key, action, mods) {
        Some(event) => {
            trace!(?window, ?event, "queued key event");
            input.push_key(event);
        }
        None => trace!(?window, scancode, "dropped unknown key"),
    }
}

fn on_scroll(registry: &Registry, window: WindowHandle, dx: f64, dy: f64) {
    let Some(input) = lookup(registry, window) else {
        trace!(?window, "scroll event for unknown window");
        return;
    };
    if let Some(previous) = input.chained.scroll.get() {
        previous(window, dx, dy);
    }
    input.add_wheel(dy);
}

// =============================================================================
// ADAPTER
// =============================================================================

pub struct InputAdapter {
    system: Arc<dyn WindowSystem>,
    registry: Arc<Registry>,
    config: AdapterConfig,
    was_active: bool,
}

impl InputAdapter {
    pub fn new(system: Arc<dyn WindowSystem>) -> Self {
        Self::with_config(system, AdapterConfig::default())
    }

    pub fn with_config(system: Arc<dyn WindowSystem>, config: AdapterConfig) -> Self {
        Self {
            system,
            registry: Arc::new(RwLock::new(HashMap::new())),
            config,
            was_active: false,
        }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Whether the last processing poll saw a focused window.
    pub fn is_active(&self) -> bool {
        self.was_active
    }

    // -------------------------------------------------------------------------
    // Poll
    // -------------------------------------------------------------------------

    /// Forward everything captured for the current window to `target`.
    ///
    /// Keys first, then mouse buttons, both in arrival order, then at most
    /// one wheel event carrying the truncated accumulated scroll.
    pub fn poll<T: InputTarget + ?Sized>(&mut self, target: &mut T) -> PollOutcome {
        let Some(window) = self.system.current_context() else {
            return self.lose_focus(None);
        };

        let focused = self.system.is_focused(window);
        if !focused && self.was_active {
            return self.lose_focus(Some(window));
        }
        self.was_active = focused;

        let (input, _) = self.attach(window);

        for event in input.drain_keys() {
            target.handle_key(event.key, event.character, event.pressed);
        }

        for event in input.drain_mouse() {
            let x = event.x as i32;
            let y = (event.y as i32).saturating_add(self.config.mouse_y_offset);
            target.handle_mouse(x, y, event.button, event.pressed);
        }

        let wheel = input.take_wheel();
        if wheel != 0.0 {
            target.handle_mouse_wheel(wheel as i32);
        }

        PollOutcome::Processed
    }

    fn lose_focus(&mut self, window: Option<WindowHandle>) -> PollOutcome {
        if !self.was_active {
            return PollOutcome::NoWindow;
        }
        self.was_active = false;
        debug!(?window, "input became inactive");
        PollOutcome::BecameInactive
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    /// Start capturing input for `window` without waiting for a poll.
    ///
    /// Returns `false` if the adapter was already listening.
    pub fn listen_to(&self, window: WindowHandle) -> bool {
        self.attach(window).1
    }

    /// Existing state for `window`, or freshly registered state plus `true`.
    fn attach(&self, window: WindowHandle) -> (Arc<WindowInput>, bool) {
        let input = {
            let mut registry = self.registry.write().unwrap_or_else(PoisonError::into_inner);
            if let Some(existing) = registry.get(&window) {
                return (Arc::clone(existing), false);
            }
            let input = Arc::new(WindowInput::new(window));
            registry.insert(window, Arc::clone(&input));
            input
        };

        self.install_callbacks(&input);
        debug!(?window, "listening to window input");
        (input, true)
    }

    /// The state is already in the registry, so callbacks firing as soon as
    /// they are installed find it.
    fn install_callbacks(&self, input: &WindowInput) {
        let window = input.handle();

        let registry = Arc::clone(&self.registry);
        let cursor_pos: CursorPosCallback =
            Arc::new(move |w: WindowHandle, x: f64, y: f64| on_cursor_pos(&registry, w, x, y));
        if let Some(previous) = self.system.set_cursor_pos_callback(window, Some(cursor_pos)) {
            let _ = input.chained.cursor_pos.set(previous);
        }

        let registry = Arc::clone(&self.registry);
        let key: KeyCallback = Arc::new(
            move |w: WindowHandle, code: NativeKey, scancode: i32, action: Action, mods: Modifiers| {
                on_key(&registry, w, code, scancode, action, mods)
            },
        );
        if let Some(previous) = self.system.set_key_callback(window, Some(key)) {
            let _ = input.chained.key.set(previous);
        }

        let registry = Arc::clone(&self.registry);
        let mouse_button: MouseButtonCallback = Arc::new(
            move |w: WindowHandle, button: i32, action: Action, mods: Modifiers| {
                on_mouse_button(&registry, w, button, action, mods)
            },
        );
        if let Some(previous) = self.system.set_mouse_button_callback(window, Some(mouse_button)) {
            let _ = input.chained.mouse_button.set(previous);
        }

        let registry = Arc::clone(&self.registry);
        let scroll: ScrollCallback = Arc::new(move |w: WindowHandle, dx: f64, dy: f64| on_scroll(&registry, w, dx, dy));
        if let Some(previous) = self.system.set_scroll_callback(window, Some(scroll)) {
            let _ = input.chained.scroll.set(previous);
        }
    }

    /// Stop listening to `window`: reinstall the callbacks that were there
    /// before and drop its state, including anything still queued.
    ///
    /// Returns `false` if the adapter was not listening.
    pub fn forget(&self, window: WindowHandle) -> bool {
        let removed = self
            .registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&window);
        let Some(input) = removed else {
            return false;
        };

        let chained = &input.chained;
        self.system.set_cursor_pos_callback(window, chained.cursor_pos.get().cloned());
        self.system.set_key_callback(window, chained.key.get().cloned());
        self.system.set_mouse_button_callback(window, chained.mouse_button.get().cloned());
        self.system.set_scroll_callback(window, chained.scroll.get().cloned());

        let (keys, mouse) = input.pending();
        debug!(?window, keys, mouse, "stopped listening to window input");
        true
    }

    // -------------------------------------------------------------------------
    // Introspection
    // -------------------------------------------------------------------------

    pub fn is_listening(&self, window: WindowHandle) -> bool {
        lookup(&self.registry, window).is_some()
    }

    pub fn window_count(&self) -> usize {
        self.registry.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Queued `(key, mouse)` event counts for `window`.
    pub fn pending(&self, window: WindowHandle) -> Option<(usize, usize)> {
        lookup(&self.registry, window).map(|input| input.pending())
    }
}

impl std::fmt::Debug for InputAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputAdapter")
            .field("config", &self.config)
            .field("was_active", &self.was_active)
            .field("windows", &self.window_count())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
