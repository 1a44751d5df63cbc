//! IME-aware text input buffering.
//!
//! During a multi-keystroke composition sequence the display must mirror
//! every keystroke, but the shared domain state (and the URL derived from
//! it) may only be updated when the sequence commits. The buffer keeps
//! the local display text and decides when a keystroke commits.

/// Local display buffer with composition-sequence tracking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    display: String,
    composing: bool,
}

impl InputBuffer {
    /// The text the display should currently show.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whether a composition sequence is active.
    #[must_use]
    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Record a keystroke. Returns the text to commit to the domain state,
    /// or `None` while a composition sequence is active.
    pub fn keystroke(&mut self, value: &str) -> Option<&str> {
        self.display = value.to_string();
        if self.composing {
            None
        } else {
            Some(&self.display)
        }
    }

    /// A composition sequence started; keystrokes stop committing.
    pub fn begin_composition(&mut self) {
        self.composing = true;
    }

    /// The sequence committed with `value`; returns the text to commit.
    pub fn end_composition(&mut self, value: &str) -> &str {
        self.display = value.to_string();
        self.composing = false;
        &self.display
    }

    /// Refresh the display from externally-updated committed state
    /// (e.g. after a history navigation replaced the composition).
    pub fn sync(&mut self, committed: &str) {
        if !self.composing {
            self.display = committed.to_string();
        }
    }
}
