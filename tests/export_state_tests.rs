//! Export busy-state tests
//!
//! Only one export may be in flight; a second trigger while busy is a
//! no-op, and the busy flag clears on every exit path.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use tankaview::export_state::ExportState;

#[test]
fn test_begin_sets_busy() {
    let mut state = ExportState::default();
    assert!(!state.is_busy());
    assert!(state.begin());
    assert!(state.is_busy());
}

#[test]
fn test_second_begin_is_inert_while_busy() {
    let mut state = ExportState::default();
    assert!(state.begin());
    assert!(!state.begin(), "a concurrent export must not start");
    assert!(state.is_busy(), "the rejected begin must not clear the flag");
}

#[test]
fn test_finish_clears_busy() {
    let mut state = ExportState::default();
    state.begin();
    state.finish();
    assert!(!state.is_busy());
    assert!(state.begin(), "a new export may start after finish");
}

#[test]
fn test_finish_clears_busy_after_failed_pipeline() {
    // The pipeline calls finish() on both the success and the error arm;
    // simulate the error arm here.
    let mut state = ExportState::default();
    assert!(state.begin());
    let result: Result<(), &str> = Err("rasterization failed");
    if result.is_err() {
        state.finish();
    }
    assert!(!state.is_busy(), "failure must not leave a stuck busy flag");
}

#[test]
fn test_finish_without_begin_is_harmless() {
    let mut state = ExportState::default();
    state.finish();
    assert!(!state.is_busy());
    assert!(state.begin());
}
