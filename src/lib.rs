//! # spark-glfw-input
//!
//! GLFW-style window input for GUI toolkits.
//!
//! Installs key, mouse button, cursor and scroll callbacks on each window it
//! sees (chaining to whatever was installed before), buffers the events per
//! window, and hands them to the toolkit in one drain per frame with native
//! key codes translated into the toolkit's vocabulary.
//!
//! ## Modules
//!
//! - [`input::native`] - Native key codes, actions, modifiers, `WindowSystem`
//! - [`input::keys`] - Toolkit key vocabulary
//! - [`input::translate`] - Key code and character tables
//! - [`input::adapter`] - Registry, callbacks and `poll`

pub mod input;

pub use input::{
    key_char, translate_key, Action, AdapterConfig, InputAdapter, InputTarget, Key, KeyEvent,
    Modifiers, MouseEvent, PollOutcome, WindowHandle, WindowSystem,
};
