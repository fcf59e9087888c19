//! Platform abstraction layer.
//!
//! Defines the `InputSink` trait and the key vocabulary shared by every
//! backend. The Windows implementation lives in a child module; other targets
//! have no injection facility and report `PlatformError::Unavailable`.

#[cfg(target_os = "windows")]
mod windows;

use thiserror::Error;

use crate::chord::KeyEvent;

// ---------------------------------------------------------------------------
// Key vocabulary
// ---------------------------------------------------------------------------

/// Keys used by the predefined chords.
///
/// Modifiers are always the left-hand variant; the platform layer maps them to
/// the matching virtual key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Left Alt (`VK_LMENU` on Windows).
    Alt,
    /// Left Windows / Super key (`VK_LWIN` on Windows).
    Meta,
    Space,
    Z,
}

/// Direction of a single key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyState {
    Down,
    Up,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum PlatformError {
    /// No injection facility exists on this target or session.
    #[error("input injection unavailable: {0}")]
    Unavailable(String),
}

// ---------------------------------------------------------------------------
// Injection seam
// ---------------------------------------------------------------------------

/// The OS input-injection facility.
///
/// `submit` hands the whole event slice to the OS in one request and returns
/// how many events were accepted. Accepted events cannot be recalled, so a
/// short count means some of the chord already reached the input stream.
pub trait InputSink {
    fn submit(&mut self, events: &[KeyEvent]) -> usize;

    /// The platform's error code for the most recent short `submit`, captured
    /// as soon as the OS call returned.
    fn last_error_code(&self) -> u32;
}

// ---------------------------------------------------------------------------
// Factory
// ---------------------------------------------------------------------------

/// Returns a `WindowsSink` backed by `SendInput`.
#[cfg(target_os = "windows")]
pub fn create_input_sink() -> Result<Box<dyn InputSink>, PlatformError> {
    Ok(Box::new(windows::WindowsSink::new()))
}

#[cfg(not(target_os = "windows"))]
pub fn create_input_sink() -> Result<Box<dyn InputSink>, PlatformError> {
    Err(PlatformError::Unavailable(format!(
        "synthetic key chords are only supported on Windows, not {}",
        std::env::consts::OS
    )))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
