//! Input buffer tests
//!
//! Keystrokes commit immediately outside a composition sequence; during
//! one, the display mirrors every keystroke but the commit is deferred
//! until the sequence ends.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use tankaview::input::InputBuffer;

#[test]
fn test_keystroke_commits_when_not_composing() {
    let mut buffer = InputBuffer::default();
    assert_eq!(buffer.keystroke("秋"), Some("秋"));
    assert_eq!(buffer.display(), "秋");
}

#[test]
fn test_keystrokes_do_not_commit_during_composition() {
    let mut buffer = InputBuffer::default();
    buffer.begin_composition();
    assert!(buffer.is_composing());
    assert_eq!(buffer.keystroke("ａ"), None);
    assert_eq!(buffer.keystroke("あｋ"), None);
    assert_eq!(buffer.display(), "あｋ", "display mirrors every keystroke");
}

#[test]
fn test_end_composition_commits_final_value() {
    let mut buffer = InputBuffer::default();
    buffer.begin_composition();
    buffer.keystroke("あき");
    assert_eq!(buffer.end_composition("秋"), "秋");
    assert!(!buffer.is_composing());
    assert_eq!(buffer.display(), "秋");
}

#[test]
fn test_commits_resume_after_composition() {
    let mut buffer = InputBuffer::default();
    buffer.begin_composition();
    buffer.keystroke("あき");
    buffer.end_composition("秋");
    assert_eq!(buffer.keystroke("秋の"), Some("秋の"));
}

#[test]
fn test_sync_refreshes_display_from_committed_state() {
    let mut buffer = InputBuffer::default();
    buffer.keystroke("古い歌");
    buffer.sync("新しい歌");
    assert_eq!(buffer.display(), "新しい歌");
}

#[test]
fn test_sync_is_ignored_mid_composition() {
    let mut buffer = InputBuffer::default();
    buffer.begin_composition();
    buffer.keystroke("あ");
    buffer.sync("別の歌");
    assert_eq!(
        buffer.display(),
        "あ",
        "an external sync must not clobber an active composition sequence"
    );
}
