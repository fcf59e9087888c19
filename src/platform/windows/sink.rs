//! Windows input sink via SendInput.
//!
//! `WindowsSink` implements `InputSink`. Injection is synchronous: `SendInput`
//! returns after the batch is queued, reporting how many events got in. A short
//! count usually means UIPI blocked the batch (the foreground window belongs to
//! a higher-integrity process).

use windows_sys::Win32::Foundation::{GetLastError, ERROR_SUCCESS};
use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYEVENTF_KEYUP,
};

use super::keycodes::keycode_to_vkcode;
use crate::chord::KeyEvent;
use crate::platform::{InputSink, KeyState};

// ---------------------------------------------------------------------------
// Public struct
// ---------------------------------------------------------------------------

/// Injects keyboard events via SendInput on Windows.
///
/// Each `submit()` call builds one `INPUT` record per event and passes the
/// whole array to a single `SendInput` call.
pub struct WindowsSink {
    /// `GetLastError` captured right after a short `SendInput`; logging can
    /// overwrite the thread's last-error before the caller asks for it.
    last_error: u32,
}

impl WindowsSink {
    pub fn new() -> Self {
        WindowsSink {
            last_error: ERROR_SUCCESS,
        }
    }

    /// Records the outcome of one `SendInput` call. Must run before anything
    /// else touches the thread's last-error.
    fn record_sent(&mut self, sent: u32, count: u32) {
        self.last_error = if sent < count {
            unsafe { GetLastError() }
        } else {
            ERROR_SUCCESS
        };
    }
}

/// Builds the `KEYBDINPUT` record for one key transition.
fn keyboard_input(event: &KeyEvent) -> INPUT {
    let dw_flags = match event.state {
        KeyState::Down => 0,
        KeyState::Up => KEYEVENTF_KEYUP,
    };

    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: keycode_to_vkcode(event.key),
                wScan: 0,
                dwFlags: dw_flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

// ---------------------------------------------------------------------------
// InputSink trait impl
// ---------------------------------------------------------------------------

impl InputSink for WindowsSink {
    fn submit(&mut self, events: &[KeyEvent]) -> usize {
        if events.is_empty() {
            return 0;
        }

        let inputs: Vec<INPUT> = events.iter().map(keyboard_input).collect();
        let Ok(count) = u32::try_from(inputs.len()) else {
            log::error!("sink: {} events do not fit in one SendInput call", inputs.len());
            return 0;
        };

        let started = std::time::Instant::now();
        let sent =
            unsafe { SendInput(count, inputs.as_ptr(), std::mem::size_of::<INPUT>() as i32) };
        self.record_sent(sent, count);

        log::debug!(
            "sink: SendInput accepted {}/{} events in {:.2}ms",
            sent,
            count,
            started.elapsed().as_secs_f64() * 1000.0
        );

        sent as usize
    }

    fn last_error_code(&self) -> u32 {
        self.last_error
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
