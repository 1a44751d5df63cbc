//! Bidirectional codec between a [`Composition`] and a URL query string.
//!
//! Both the address-bar sync and the share action go through this module,
//! so the two directions cannot drift apart. Decoding produces a partial
//! update that is merged onto existing state: present keys overwrite,
//! absent keys retain the current value. `font`/`bg` values are validated
//! against the catalogs, with the catalog default substituted for unknown
//! identifiers.

use url::form_urlencoded;

use crate::catalog;
use crate::composition::Composition;

/// Fields decoded from a query string. `None` means the key was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryUpdate {
    pub text: Option<String>,
    pub font: Option<String>,
    pub background: Option<String>,
    pub vertical: Option<bool>,
}

impl QueryUpdate {
    /// Merge this update onto `composition`.
    ///
    /// Present fields overwrite; absent fields are left untouched. Unknown
    /// `font`/`bg` identifiers fall back to the catalog default, and text
    /// is clamped to the composition's length bound.
    pub fn apply_to(self, composition: &mut Composition) {
        if let Some(text) = self.text {
            composition.set_text(&text);
        }
        if let Some(font) = self.font {
            composition.font = catalog::font_by_family(&font)
                .unwrap_or_else(catalog::default_font)
                .family
                .to_string();
        }
        if let Some(background) = self.background {
            composition.background = catalog::background_by_token(&background)
                .unwrap_or_else(catalog::default_background)
                .token
                .to_string();
        }
        if let Some(vertical) = self.vertical {
            composition.vertical = vertical;
        }
    }
}

/// Serialize for the address bar: empty `text` is omitted, `vertical` is
/// always present as `"true"`/`"false"`.
#[must_use]
pub fn encode(composition: &Composition) -> String {
    encode_pairs(composition, false)
}

/// Serialize for sharing: every key is always present, so a pasted link
/// reconstructs the full composition regardless of the receiver's state.
#[must_use]
pub fn encode_full(composition: &Composition) -> String {
    encode_pairs(composition, true)
}

fn encode_pairs(composition: &Composition, include_empty_text: bool) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if include_empty_text || !composition.text.is_empty() {
        serializer.append_pair("text", &composition.text);
    }
    serializer.append_pair("font", &composition.font);
    serializer.append_pair("bg", &composition.background);
    serializer.append_pair("vertical", if composition.vertical { "true" } else { "false" });
    serializer.finish()
}

/// Parse a query string (with or without the leading `?`).
///
/// The first occurrence of each key wins, matching `URLSearchParams.get`.
/// A present `vertical` equals `true` only for the literal string `"true"`.
#[must_use]
pub fn decode(query: &str) -> QueryUpdate {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut update = QueryUpdate::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "text" if update.text.is_none() => update.text = Some(value.into_owned()),
            "font" if update.font.is_none() => update.font = Some(value.into_owned()),
            "bg" if update.background.is_none() => {
                update.background = Some(value.into_owned());
            }
            "vertical" if update.vertical.is_none() => {
                update.vertical = Some(value == "true");
            }
            _ => {}
        }
    }
    update
}
