//! keychord -- synthesizes the Windows system-menu (Alt+Space) and
//! Snap Layout (Win+Z) key chords.
//!
//! `trigger(selector)` maps a small integer to a predefined chord and injects
//! it with one `SendInput` call. Injection failures are logged, never returned;
//! use `try_trigger` for the real outcome.

pub mod chord;
pub mod config;
pub mod platform;
pub mod trigger;

pub use chord::{Chord, Combination, KeyEvent, Selector};
pub use platform::{InputSink, KeyCode, KeyState, PlatformError};
pub use trigger::{trigger, trigger_with, try_trigger, try_trigger_with, TriggerError};
