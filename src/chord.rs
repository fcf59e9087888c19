//! Key chords and the selectors that name them.
//!
//! A `Chord` is an ordered list of `KeyEvent`s that presses a set of keys and
//! releases them in reverse order. `Combination` is the fixed table of chords
//! this crate knows how to trigger, indexed by a numeric `Selector`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::platform::{KeyCode, KeyState};

// ---------------------------------------------------------------------------
// Key events
// ---------------------------------------------------------------------------

/// One atomic key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub state: KeyState,
}

impl KeyEvent {
    pub fn down(key: KeyCode) -> Self {
        KeyEvent {
            key,
            state: KeyState::Down,
        }
    }

    pub fn up(key: KeyCode) -> Self {
        KeyEvent {
            key,
            state: KeyState::Up,
        }
    }
}

// ---------------------------------------------------------------------------
// Chord
// ---------------------------------------------------------------------------

/// An ordered key sequence representing one logical key combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    events: Vec<KeyEvent>,
}

impl Chord {
    /// Presses `keys` in order, then releases them last-pressed-first.
    ///
    /// `press_release(&[Alt, Space])` yields
    /// `[Alt down, Space down, Space up, Alt up]`. A key listed more than once
    /// is only pressed at its first position.
    pub fn press_release(keys: &[KeyCode]) -> Self {
        let mut held: Vec<KeyCode> = Vec::with_capacity(keys.len());
        for &key in keys {
            if !held.contains(&key) {
                held.push(key);
            }
        }

        let events = held
            .iter()
            .map(|&k| KeyEvent::down(k))
            .chain(held.iter().rev().map(|&k| KeyEvent::up(k)))
            .collect();
        Chord { events }
    }

    pub fn events(&self) -> &[KeyEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// True when every press has a later release and releases are LIFO.
    pub fn is_balanced(&self) -> bool {
        is_balanced(&self.events)
    }
}

/// Checks press/release pairing over a raw event sequence.
///
/// A release must match the most recent unreleased press, a key may not be
/// pressed twice while held, and nothing may remain held at the end.
pub fn is_balanced(events: &[KeyEvent]) -> bool {
    let mut held: Vec<KeyCode> = Vec::with_capacity(events.len());
    for event in events {
        match event.state {
            KeyState::Down => {
                if held.contains(&event.key) {
                    return false;
                }
                held.push(event.key);
            }
            KeyState::Up => {
                if held.pop() != Some(event.key) {
                    return false;
                }
            }
        }
    }
    held.is_empty()
}

// ---------------------------------------------------------------------------
// Selector / Combination
// ---------------------------------------------------------------------------

/// Numeric index choosing a predefined chord.
pub type Selector = u32;

/// The predefined chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combination {
    /// Alt+Space: opens the foreground window's system menu.
    SystemMenu,
    /// Win+Z: opens the Windows 11 Snap Layout picker.
    SnapLayout,
}

impl Combination {
    pub const ALL: [Combination; 2] = [Combination::SystemMenu, Combination::SnapLayout];

    pub fn from_selector(selector: Selector) -> Option<Self> {
        match selector {
            0 => Some(Combination::SystemMenu),
            1 => Some(Combination::SnapLayout),
            _ => None,
        }
    }

    pub fn selector(self) -> Selector {
        match self {
            Combination::SystemMenu => 0,
            Combination::SnapLayout => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Combination::SystemMenu => "system-menu",
            Combination::SnapLayout => "snap-layout",
        }
    }

    /// Builds a fresh chord; nothing is shared between calls.
    pub fn chord(self) -> Chord {
        match self {
            Combination::SystemMenu => Chord::press_release(&[KeyCode::Alt, KeyCode::Space]),
            Combination::SnapLayout => Chord::press_release(&[KeyCode::Meta, KeyCode::Z]),
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by `Combination::from_str` for an unrecognised name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown combination {0:?} (expected system-menu or snap-layout)")]
pub struct UnknownCombination(pub String);

impl FromStr for Combination {
    type Err = UnknownCombination;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Combination::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCombination(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
