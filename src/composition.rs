//! The composition — the single piece of domain state being edited.

use serde::{Deserialize, Serialize};

use crate::catalog;

/// Maximum poem length, counted in characters (not bytes).
pub const MAX_TEXT_CHARS: usize = 50;

/// Placeholder drawn by the display when the poem is empty.
pub const PLACEHOLDER: &str = "ここに短歌を入力してください";

/// The poem being composed, with its styling choices.
///
/// This is the single source of truth; the address-bar query string is a
/// derived serialization of it (see [`crate::query`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    /// Poem body, newline-delimited lines. Always defined; empty means
    /// "nothing entered yet", never absent.
    pub text: String,
    /// CSS family string of the active font (a catalog member).
    pub font: String,
    /// Token of the active background (a catalog member).
    pub background: String,
    /// Vertical right-to-left flow when true, horizontal otherwise.
    #[serde(rename = "isVertical")]
    pub vertical: bool,
}

impl Default for Composition {
    fn default() -> Self {
        Composition {
            text: String::new(),
            font: catalog::default_font().family.to_string(),
            background: catalog::default_background().token.to_string(),
            vertical: true,
        }
    }
}

impl Composition {
    /// Replace the poem text, clamping to [`MAX_TEXT_CHARS`] characters.
    pub fn set_text(&mut self, text: &str) {
        self.text = truncate_chars(text, MAX_TEXT_CHARS);
    }

    /// The poem split into display lines.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }
}

/// Truncate to at most `max` characters, preserving char boundaries.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars_not_bytes() {
        // 3 chars, 9 bytes
        assert_eq!(truncate_chars("短歌集", 2), "短歌");
        assert_eq!(truncate_chars("短歌集", 3), "短歌集");
        assert_eq!(truncate_chars("短歌集", 10), "短歌集");
    }

    #[test]
    fn lines_split_on_newline() {
        let mut c = Composition::default();
        c.set_text("秋の夜の\n月を見て");
        assert_eq!(c.lines(), vec!["秋の夜の", "月を見て"]);
    }

    #[test]
    fn set_text_clamps() {
        let mut c = Composition::default();
        let long: String = "あ".repeat(MAX_TEXT_CHARS + 5);
        c.set_text(&long);
        assert_eq!(c.text.chars().count(), MAX_TEXT_CHARS);
    }
}
