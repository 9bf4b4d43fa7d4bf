//! End-to-end tests for the input adapter.
//!
//! Drives the adapter through a fake window system that stores installed
//! callbacks per window and fires them the way the native library would.
//!
//! Run with: cargo test --test adapter -- --nocapture

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::thread;

use spark_glfw_input::input::native::{self, *};
use spark_glfw_input::input::translate::table_entries;
use spark_glfw_input::{AdapterConfig, InputAdapter, InputTarget, Key, PollOutcome};

// =============================================================================
// FAKE WINDOW SYSTEM
// =============================================================================

#[derive(Default)]
struct FakeState {
    current: Option<WindowHandle>,
    focused: HashSet<WindowHandle>,
    cursor_pos: HashMap<WindowHandle, CursorPosCallback>,
    mouse_button: HashMap<WindowHandle, MouseButtonCallback>,
    key: HashMap<WindowHandle, KeyCallback>,
    scroll: HashMap<WindowHandle, ScrollCallback>,
}

#[derive(Default)]
struct FakeSystem {
    state: Mutex<FakeState>,
}

fn swap<T>(map: &mut HashMap<WindowHandle, T>, window: WindowHandle, value: Option<T>) -> Option<T> {
    match value {
        Some(value) => map.insert(window, value),
        None => map.remove(&window),
    }
}

impl FakeSystem {
    /// Make `window` current and focused.
    fn activate(&self, window: WindowHandle) {
        let mut state = self.state.lock().unwrap();
        state.current = Some(window);
        state.focused.insert(window);
    }

    fn set_current(&self, window: Option<WindowHandle>) {
        self.state.lock().unwrap().current = window;
    }

    fn set_focused(&self, window: WindowHandle, focused: bool) {
        let mut state = self.state.lock().unwrap();
        if focused {
            state.focused.insert(window);
        } else {
            state.focused.remove(&window);
        }
    }

    // Callbacks are cloned out before firing so they can re-enter the system.

    fn cursor(&self, window: WindowHandle, x: f64, y: f64) {
        let cb = self.state.lock().unwrap().cursor_pos.get(&window).cloned();
        if let Some(cb) = cb {
            cb(window, x, y);
        }
    }

    fn button(&self, window: WindowHandle, button: i32, action: Action) {
        let cb = self.state.lock().unwrap().mouse_button.get(&window).cloned();
        if let Some(cb) = cb {
            cb(window, button, action, Modifiers::empty());
        }
    }

    fn key(&self, window: WindowHandle, code: NativeKey, action: Action, mods: Modifiers) {
        let cb = self.state.lock().unwrap().key.get(&window).cloned();
        if let Some(cb) = cb {
            cb(window, code, 0, action, mods);
        }
    }

    fn scroll(&self, window: WindowHandle, dx: f64, dy: f64) {
        let cb = self.state.lock().unwrap().scroll.get(&window).cloned();
        if let Some(cb) = cb {
            cb(window, dx, dy);
        }
    }

    fn has_key_callback(&self, window: WindowHandle) -> bool {
        self.state.lock().unwrap().key.contains_key(&window)
    }
}

impl WindowSystem for FakeSystem {
    fn current_context(&self) -> Option<WindowHandle> {
        self.state.lock().unwrap().current
    }

    fn is_focused(&self, window: WindowHandle) -> bool {
        self.state.lock().unwrap().focused.contains(&window)
    }

    fn set_cursor_pos_callback(
        &self,
        window: WindowHandle,
        callback: Option<CursorPosCallback>,
    ) -> Option<CursorPosCallback> {
        swap(&mut self.state.lock().unwrap().cursor_pos, window, callback)
    }

    fn set_mouse_button_callback(
        &self,
        window: WindowHandle,
        callback: Option<MouseButtonCallback>,
    ) -> Option<MouseButtonCallback> {
        swap(&mut self.state.lock().unwrap().mouse_button, window, callback)
    }

    fn set_key_callback(
        &self,
        window: WindowHandle,
        callback: Option<KeyCallback>,
    ) -> Option<KeyCallback> {
        swap(&mut self.state.lock().unwrap().key, window, callback)
    }

    fn set_scroll_callback(
        &self,
        window: WindowHandle,
        callback: Option<ScrollCallback>,
    ) -> Option<ScrollCallback> {
        swap(&mut self.state.lock().unwrap().scroll, window, callback)
    }
}

// =============================================================================
// RECORDING TARGET
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Key(Key, char, bool),
    Mouse(i32, i32, i32, bool),
    Wheel(i32),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl Recorder {
    fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

impl InputTarget for Recorder {
    fn handle_key(&mut self, key: Key, character: char, pressed: bool) {
        self.calls.push(Call::Key(key, character, pressed));
    }

    fn handle_mouse(&mut self, x: i32, y: i32, button: i32, pressed: bool) {
        self.calls.push(Call::Mouse(x, y, button, pressed));
    }

    fn handle_mouse_wheel(&mut self, delta: i32) {
        self.calls.push(Call::Wheel(delta));
    }
}

// =============================================================================
// HELPERS
// =============================================================================

const MAIN: WindowHandle = WindowHandle(0x1000);
const OTHER: WindowHandle = WindowHandle(0x2000);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Adapter already listening to an active `MAIN`.
fn setup() -> (Arc<FakeSystem>, InputAdapter, Recorder) {
    init_tracing();
    let system = Arc::new(FakeSystem::default());
    system.activate(MAIN);
    let mut adapter = InputAdapter::new(system.clone());
    let mut gui = Recorder::default();
    assert_eq!(adapter.poll(&mut gui), PollOutcome::Processed);
    assert!(gui.calls.is_empty());
    (system, adapter, gui)
}

// =============================================================================
// TESTS
// =============================================================================

#[test]
fn test_keys_forwarded_in_order() {
    let (system, mut adapter, mut gui) = setup();

    system.key(MAIN, native::KEY_H, Action::Press, Modifiers::SHIFT);
    system.key(MAIN, native::KEY_H, Action::Release, Modifiers::SHIFT);
    system.key(MAIN, native::KEY_I, Action::Press, Modifiers::empty());
    system.key(MAIN, native::KEY_I, Action::Repeat, Modifiers::empty());
    system.key(MAIN, native::KEY_ESCAPE, Action::Press, Modifiers::empty());

    assert_eq!(adapter.poll(&mut gui), PollOutcome::Processed);
    assert_eq!(
        gui.take(),
        vec![
            Call::Key(Key::H, 'H', true),
            Call::Key(Key::H, 'H', false),
            Call::Key(Key::I, 'i', true),
            Call::Key(Key::I, 'i', true),
            Call::Key(Key::ESCAPE, '\0', true),
        ]
    );

    // Drained completely
    adapter.poll(&mut gui);
    assert!(gui.take().is_empty());
}

#[test]
fn test_unknown_key_is_not_queued() {
    let (system, mut adapter, mut gui) = setup();

    system.key(MAIN, native::KEY_UNKNOWN, Action::Press, Modifiers::empty());
    assert_eq!(adapter.pending(MAIN), Some((0, 0)));

    system.key(MAIN, 4000, Action::Press, Modifiers::SHIFT);
    system.key(MAIN, native::KEY_WORLD_1, Action::Release, Modifiers::empty());
    adapter.poll(&mut gui);
    assert_eq!(
        gui.take(),
        vec![Call::Key(Key::NONE, '\0', true), Call::Key(Key::NONE, '\0', false)]
    );
}

#[test]
fn test_every_table_entry_through_callbacks() {
    let (system, mut adapter, mut gui) = setup();

    for mapping in table_entries() {
        system.key(MAIN, mapping.native, Action::Press, Modifiers::empty());
        system.key(MAIN, mapping.native, Action::Press, Modifiers::SHIFT);
    }
    adapter.poll(&mut gui);

    let calls = gui.take();
    assert_eq!(calls.len(), table_entries().len() * 2);
    for (mapping, pair) in table_entries().iter().zip(calls.chunks(2)) {
        let [lower, upper] = mapping.chars.unwrap_or(['\0', '\0']);
        assert_eq!(pair[0], Call::Key(mapping.key, lower, true), "{mapping:?}");
        assert_eq!(pair[1], Call::Key(mapping.key, upper, true), "{mapping:?}");
    }
}

#[test]
fn test_scroll_accumulates_then_resets() {
    let (system, mut adapter, mut gui) = setup();

    system.scroll(MAIN, 5.0, 2.3);
    system.scroll(MAIN, -7.0, -0.4);
    adapter.poll(&mut gui);
    assert_eq!(gui.take(), vec![Call::Wheel(1)]);

    adapter.poll(&mut gui);
    assert!(gui.take().is_empty());
}

#[test]
fn test_fractional_scroll_still_forwards() {
    let (system, mut adapter, mut gui) = setup();

    system.scroll(MAIN, 0.0, 0.25);
    adapter.poll(&mut gui);
    assert_eq!(gui.take(), vec![Call::Wheel(0)]);

    system.scroll(MAIN, 0.0, -2.75);
    adapter.poll(&mut gui);
    assert_eq!(gui.take(), vec![Call::Wheel(-2)]);
}

#[test]
fn test_horizontal_scroll_ignored() {
    let (system, mut adapter, mut gui) = setup();

    system.scroll(MAIN, 3.0, 0.0);
    adapter.poll(&mut gui);
    assert!(gui.take().is_empty());
}

#[test]
fn test_mouse_y_offset() {
    let (system, mut adapter, mut gui) = setup();

    system.cursor(MAIN, 100.0, 50.0);
    system.button(MAIN, 0, Action::Press);
    system.cursor(MAIN, 100.9, 50.7);
    system.button(MAIN, 1, Action::Release);
    adapter.poll(&mut gui);

    assert_eq!(
        gui.take(),
        vec![Call::Mouse(100, 49, 0, true), Call::Mouse(100, 49, 1, false)]
    );
}

#[test]
fn test_cursor_moves_alone_forward_nothing() {
    let (system, mut adapter, mut gui) = setup();

    system.cursor(MAIN, 10.0, 10.0);
    system.cursor(MAIN, 20.0, 30.0);
    adapter.poll(&mut gui);
    assert!(gui.take().is_empty());
}

#[test]
fn test_configured_offset() {
    init_tracing();
    let system = Arc::new(FakeSystem::default());
    system.activate(MAIN);
    let config = AdapterConfig::default().with_mouse_y_offset(0);
    let mut adapter = InputAdapter::with_config(system.clone(), config);
    let mut gui = Recorder::default();
    adapter.poll(&mut gui);

    system.cursor(MAIN, 7.0, 8.0);
    system.button(MAIN, 2, Action::Press);
    adapter.poll(&mut gui);
    assert_eq!(gui.take(), vec![Call::Mouse(7, 8, 2, true)]);
}

#[test]
fn test_drain_order_keys_mouse_wheel() {
    let (system, mut adapter, mut gui) = setup();

    system.scroll(MAIN, 0.0, 3.0);
    system.button(MAIN, 0, Action::Press);
    system.key(MAIN, native::KEY_A, Action::Press, Modifiers::empty());
    adapter.poll(&mut gui);

    assert_eq!(
        gui.take(),
        vec![
            Call::Key(Key::A, 'a', true),
            Call::Mouse(0, -1, 0, true),
            Call::Wheel(3),
        ]
    );
}

#[test]
fn test_no_window() {
    init_tracing();
    let system = Arc::new(FakeSystem::default());
    let mut adapter = InputAdapter::new(system.clone());
    let mut gui = Recorder::default();

    let outcome = adapter.poll(&mut gui);
    assert_eq!(outcome, PollOutcome::NoWindow);
    assert!(outcome.should_continue());
    assert_eq!(adapter.window_count(), 0);
}

#[test]
fn test_focus_lost_reported_once_and_events_deferred() {
    let (system, mut adapter, mut gui) = setup();
    assert!(adapter.is_active());

    system.key(MAIN, native::KEY_Q, Action::Press, Modifiers::empty());
    system.set_focused(MAIN, false);

    let outcome = adapter.poll(&mut gui);
    assert_eq!(outcome, PollOutcome::BecameInactive);
    assert!(!outcome.should_continue());
    assert!(gui.take().is_empty());
    assert_eq!(adapter.pending(MAIN), Some((1, 0)));

    // Reported once; the deferred event is delivered on the next poll
    assert_eq!(adapter.poll(&mut gui), PollOutcome::Processed);
    assert_eq!(gui.take(), vec![Call::Key(Key::Q, 'q', true)]);
    assert!(!adapter.is_active());

    system.set_focused(MAIN, true);
    assert_eq!(adapter.poll(&mut gui), PollOutcome::Processed);
    assert!(adapter.is_active());
}

#[test]
fn test_context_vanishing_is_a_transition() {
    let (system, mut adapter, mut gui) = setup();

    system.set_current(None);
    assert_eq!(adapter.poll(&mut gui), PollOutcome::BecameInactive);
    assert_eq!(adapter.poll(&mut gui), PollOutcome::NoWindow);
}

#[test]
fn test_previous_callbacks_are_chained() {
    init_tracing();
    let system = Arc::new(FakeSystem::default());
    system.activate(MAIN);

    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let log = seen.clone();
    system.set_key_callback(
        MAIN,
        Some(Arc::new(move |_w: WindowHandle, code: NativeKey, _s: i32, action: Action, _m: Modifiers| {
            log.lock().unwrap().push(format!("key {code} {action:?}"));
        })),
    );
    let log = seen.clone();
    system.set_scroll_callback(
        MAIN,
        Some(Arc::new(move |_w: WindowHandle, dx: f64, dy: f64| {
            log.lock().unwrap().push(format!("scroll {dx} {dy}"));
        })),
    );

    let mut adapter = InputAdapter::new(system.clone());
    let mut gui = Recorder::default();
    adapter.poll(&mut gui);

    system.key(MAIN, native::KEY_UNKNOWN, Action::Press, Modifiers::empty());
    system.key(MAIN, native::KEY_B, Action::Release, Modifiers::empty());
    system.scroll(MAIN, 1.0, 2.0);
    system.button(MAIN, 0, Action::Press);

    // Previous listeners see everything, including keys the adapter drops
    assert_eq!(
        *seen.lock().unwrap(),
        vec!["key -1 Press", "key 66 Release", "scroll 1 2"]
    );

    adapter.poll(&mut gui);
    assert_eq!(
        gui.take(),
        vec![Call::Key(Key::B, 'b', false), Call::Mouse(0, -1, 0, true), Call::Wheel(2)]
    );
}

#[test]
fn test_listen_to_before_first_poll() {
    init_tracing();
    let system = Arc::new(FakeSystem::default());
    let mut adapter = InputAdapter::new(system.clone());
    let mut gui = Recorder::default();

    assert!(adapter.listen_to(MAIN));
    assert!(!adapter.listen_to(MAIN));
    assert!(adapter.is_listening(MAIN));
    assert_eq!(adapter.window_count(), 1);

    system.key(MAIN, native::KEY_KP_5, Action::Press, Modifiers::SHIFT);
    system.activate(MAIN);
    adapter.poll(&mut gui);
    assert_eq!(gui.take(), vec![Call::Key(Key::NUMPAD5, '5', true)]);
    assert_eq!(adapter.window_count(), 1);
}

#[test]
fn test_windows_are_isolated() {
    let (system, mut adapter, mut gui) = setup();
    adapter.listen_to(OTHER);

    system.key(OTHER, native::KEY_X, Action::Press, Modifiers::empty());
    system.key(MAIN, native::KEY_M, Action::Press, Modifiers::empty());
    adapter.poll(&mut gui);
    assert_eq!(gui.take(), vec![Call::Key(Key::M, 'm', true)]);
    assert_eq!(adapter.pending(OTHER), Some((1, 0)));

    system.activate(OTHER);
    adapter.poll(&mut gui);
    assert_eq!(gui.take(), vec![Call::Key(Key::X, 'x', true)]);
}

#[test]
fn test_callbacks_for_unlistened_window_are_ignored() {
    let (system, adapter, _gui) = setup();

    system.key(OTHER, native::KEY_A, Action::Press, Modifiers::empty());
    assert!(!adapter.is_listening(OTHER));
    assert_eq!(adapter.pending(OTHER), None);
}

#[test]
fn test_forget_restores_previous_callbacks() {
    init_tracing();
    let system = Arc::new(FakeSystem::default());
    system.activate(MAIN);

    let hits = Arc::new(Mutex::new(0));
    let counter = hits.clone();
    system.set_key_callback(
        MAIN,
        Some(Arc::new(move |_w: WindowHandle, _k: NativeKey, _s: i32, _a: Action, _m: Modifiers| {
            *counter.lock().unwrap() += 1;
        })),
    );

    let mut adapter = InputAdapter::new(system.clone());
    let mut gui = Recorder::default();
    adapter.poll(&mut gui);
    system.key(MAIN, native::KEY_A, Action::Press, Modifiers::empty());

    assert!(adapter.forget(MAIN));
    assert!(!adapter.forget(MAIN));
    assert!(!adapter.is_listening(MAIN));
    assert!(system.has_key_callback(MAIN));

    // The previous listener still works, the adapter no longer records
    system.key(MAIN, native::KEY_A, Action::Press, Modifiers::empty());
    assert_eq!(*hits.lock().unwrap(), 2);
    assert_eq!(adapter.pending(MAIN), None);

    // Pending events went with the state; the next poll re-attaches fresh
    adapter.poll(&mut gui);
    assert!(gui.take().is_empty());
    assert!(adapter.is_listening(MAIN));
}

#[test]
fn test_forget_without_previous_clears_slots() {
    let (system, adapter, _gui) = setup();

    assert!(system.has_key_callback(MAIN));
    adapter.forget(MAIN);
    assert!(!system.has_key_callback(MAIN));
}

#[test]
fn test_concurrent_producers() {
    let (system, mut adapter, mut gui) = setup();
    const THREADS: usize = 4;
    const PER_THREAD: usize = 250;
    let codes = [native::KEY_A, native::KEY_B, native::KEY_C, native::KEY_D];

    let handles: Vec<_> = codes
        .iter()
        .map(|&code| {
            let system = system.clone();
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let action = if i % 2 == 0 { Action::Press } else { Action::Release };
                    system.key(MAIN, code, action, Modifiers::empty());
                    system.scroll(MAIN, 0.0, 1.0);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    adapter.poll(&mut gui);
    let calls = gui.take();
    assert_eq!(calls.len(), THREADS * PER_THREAD + 1);
    assert_eq!(calls.last(), Some(&Call::Wheel((THREADS * PER_THREAD) as i32)));

    // Per-producer order survives: press/release strictly alternate per key
    for key in [Key::A, Key::B, Key::C, Key::D] {
        let states: Vec<bool> = calls
            .iter()
            .filter_map(|call| match call {
                Call::Key(k, _, pressed) if *k == key => Some(*pressed),
                _ => None,
            })
            .collect();
        assert_eq!(states.len(), PER_THREAD);
        assert!(states.iter().enumerate().all(|(i, &p)| p == (i % 2 == 0)));
    }
}
