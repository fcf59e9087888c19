//! KeyCode -> Windows virtual key code (u16) mapping.
//!
//! VK codes are from the Windows SDK (winuser.h). Modifiers are injected as
//! the left-hand variant (`VK_LMENU`, `VK_LWIN`) so the shell sees the same
//! keys a user would press.

use crate::platform::KeyCode;

pub const VK_SPACE: u16 = 0x20;
pub const VK_Z: u16 = 0x5A;
pub const VK_LWIN: u16 = 0x5B;
pub const VK_LMENU: u16 = 0xA4;

/// Converts a canonical `KeyCode` to the virtual key code used in `KEYBDINPUT`.
///
/// None of the chord keys are extended keys, so no extra `dwFlags` are needed.
pub fn keycode_to_vkcode(key: KeyCode) -> u16 {
    match key {
        KeyCode::Alt => VK_LMENU,
        KeyCode::Meta => VK_LWIN,
        KeyCode::Space => VK_SPACE,
        // VK_A .. VK_Z match ASCII uppercase.
        KeyCode::Z => VK_Z,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
