//! Selector dispatch: build the chord, submit it, check the count.
//!
//! `trigger` and `trigger_with` always report the selector as handled; any
//! failure only shows up in the log. `try_trigger` and `try_trigger_with` run
//! the same steps and return the real outcome.

use thiserror::Error;

use crate::chord::{Combination, Selector};
use crate::platform::{self, InputSink, PlatformError};

#[derive(Debug, Error)]
pub enum TriggerError {
    /// Nothing reached the sink, so there is no OS error code to report.
    #[error("no combination for selector {0}, nothing injected")]
    UnknownSelector(Selector),
    /// The OS took fewer events than were submitted. The accepted prefix has
    /// already reached the input stream.
    #[error("{combination}: injected {accepted} of {submitted} events (os error {os_code})")]
    Undercount {
        combination: Combination,
        accepted: usize,
        submitted: usize,
        os_code: u32,
    },
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Injects the chord for `selector` through the platform sink.
///
/// Always returns `true`.
pub fn trigger(selector: Selector) -> bool {
    report(try_trigger(selector))
}

/// Same as `trigger`, against a caller-supplied sink.
pub fn trigger_with(sink: &mut dyn InputSink, selector: Selector) -> bool {
    report(try_trigger_with(sink, selector))
}

/// Injects the chord for `selector` through the platform sink and returns
/// the combination that was fully accepted.
pub fn try_trigger(selector: Selector) -> Result<Combination, TriggerError> {
    let mut sink = platform::create_input_sink()?;
    try_trigger_with(sink.as_mut(), selector)
}

pub fn try_trigger_with(
    sink: &mut dyn InputSink,
    selector: Selector,
) -> Result<Combination, TriggerError> {
    log::info!("trigger: selector {}", selector);

    let combination =
        Combination::from_selector(selector).ok_or(TriggerError::UnknownSelector(selector))?;
    let chord = combination.chord();
    debug_assert!(chord.is_balanced());

    let submitted = chord.len();
    let accepted = sink.submit(chord.events());
    if accepted != submitted {
        return Err(TriggerError::Undercount {
            combination,
            accepted,
            submitted,
            os_code: sink.last_error_code(),
        });
    }

    log::debug!("trigger: {} injected ({} events)", combination, submitted);
    Ok(combination)
}

fn report(result: Result<Combination, TriggerError>) -> bool {
    if let Err(e) = result {
        log::error!("trigger: {e}");
    }
    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::chord::KeyEvent;
    use crate::platform::KeyCode;

    /// Records every submitted batch and accepts up to `limit` events of each.
    struct RecordingSink {
        limit: usize,
        error_code: u32,
        batches: Vec<Vec<KeyEvent>>,
        error_reads: Cell<usize>,
    }

    impl RecordingSink {
        fn accepting_all() -> Self {
            Self::accepting(usize::MAX)
        }

        fn accepting(limit: usize) -> Self {
            RecordingSink {
                limit,
                error_code: 5, // ERROR_ACCESS_DENIED
                batches: Vec::new(),
                error_reads: Cell::new(0),
            }
        }
    }

    impl InputSink for RecordingSink {
        fn submit(&mut self, events: &[KeyEvent]) -> usize {
            self.batches.push(events.to_vec());
            events.len().min(self.limit)
        }

        fn last_error_code(&self) -> u32 {
            self.error_reads.set(self.error_reads.get() + 1);
            self.error_code
        }
    }

    #[test]
    fn selector_zero_submits_alt_space() {
        let mut sink = RecordingSink::accepting_all();
        assert!(trigger_with(&mut sink, 0));
        assert_eq!(
            sink.batches,
            vec![vec![
                KeyEvent::down(KeyCode::Alt),
                KeyEvent::down(KeyCode::Space),
                KeyEvent::up(KeyCode::Space),
                KeyEvent::up(KeyCode::Alt),
            ]]
        );
    }

    #[test]
    fn selector_one_submits_win_z() {
        let mut sink = RecordingSink::accepting_all();
        assert!(trigger_with(&mut sink, 1));
        assert_eq!(
            sink.batches,
            vec![vec![
                KeyEvent::down(KeyCode::Meta),
                KeyEvent::down(KeyCode::Z),
                KeyEvent::up(KeyCode::Z),
                KeyEvent::up(KeyCode::Meta),
            ]]
        );
    }

    #[test]
    fn unknown_selector_submits_nothing_and_still_returns_true() {
        for selector in [2, 7, u32::MAX] {
            let mut sink = RecordingSink::accepting_all();
            assert!(trigger_with(&mut sink, selector));
            assert!(sink.batches.is_empty(), "selector {selector}");
        }
    }

    #[test]
    fn unknown_selector_is_an_error_in_strict_mode() {
        let mut sink = RecordingSink::accepting_all();
        let err = try_trigger_with(&mut sink, 2).unwrap_err();
        assert!(matches!(err, TriggerError::UnknownSelector(2)));
        assert!(sink.batches.is_empty());
        assert_eq!(sink.error_reads.get(), 0);
        assert_eq!(err.to_string(), "no combination for selector 2, nothing injected");
    }

    #[test]
    fn full_acceptance_reports_combination() {
        let mut sink = RecordingSink::accepting_all();
        assert_eq!(try_trigger_with(&mut sink, 0).unwrap(), Combination::SystemMenu);
        assert_eq!(try_trigger_with(&mut sink, 1).unwrap(), Combination::SnapLayout);
        assert_eq!(sink.error_reads.get(), 0);
    }

    #[test]
    fn undercount_is_detected_and_reads_os_error() {
        for limit in 0..4 {
            let mut sink = RecordingSink::accepting(limit);
            match try_trigger_with(&mut sink, 1) {
                Err(TriggerError::Undercount {
                    combination,
                    accepted,
                    submitted,
                    os_code,
                }) => {
                    assert_eq!(combination, Combination::SnapLayout);
                    assert_eq!(accepted, limit);
                    assert_eq!(submitted, 4);
                    assert_eq!(os_code, 5);
                }
                other => panic!("limit {limit}: expected undercount, got {other:?}"),
            }
            assert_eq!(sink.error_reads.get(), 1);
        }
    }

    #[test]
    fn undercount_still_returns_true() {
        let mut sink = RecordingSink::accepting(2);
        assert!(trigger_with(&mut sink, 0));
        assert_eq!(sink.batches.len(), 1);
        assert_eq!(sink.error_reads.get(), 1);
    }

    /// Repeated calls build independent, identical chords.
    #[test]
    fn repeated_trigger_submits_identical_batches() {
        let mut sink = RecordingSink::accepting_all();
        assert!(trigger_with(&mut sink, 0));
        assert!(trigger_with(&mut sink, 0));
        assert_eq!(sink.batches.len(), 2);
        assert_eq!(sink.batches[0], sink.batches[1]);
    }

    #[test]
    fn undercount_message_names_counts() {
        let err = TriggerError::Undercount {
            combination: Combination::SystemMenu,
            accepted: 1,
            submitted: 4,
            os_code: 5,
        };
        assert_eq!(
            err.to_string(),
            "system-menu: injected 1 of 4 events (os error 5)"
        );
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn platform_trigger_without_sink_returns_true() {
        assert!(trigger(0));
        assert!(matches!(
            try_trigger(0),
            Err(TriggerError::Platform(PlatformError::Unavailable(_)))
        ));
    }
}
