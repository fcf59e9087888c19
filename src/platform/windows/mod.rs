//! Windows platform backend: SendInput injection.
//!
//! `WindowsSink` submits each chord as one `SendInput` batch and reads
//! `GetLastError` when the batch is cut short.

mod keycodes;
mod sink;

pub use sink::WindowsSink;
