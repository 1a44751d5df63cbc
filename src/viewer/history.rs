//! Address-bar synchronization for `TankaView`.
//!
//! State → URL goes through `history.replaceState` so per-keystroke
//! updates never create navigation entries; URL → state reads
//! `location.search` and merges through the query codec.

use wasm_bindgen::JsValue;

use crate::composition::Composition;
use crate::error::{Result, TankaError};
use crate::query;

/// Current `location.search` (leading `?` included; empty when none).
pub(crate) fn location_query() -> Option<String> {
    web_sys::window()?.location().search().ok()
}

/// Rewrite the address bar to reflect `composition`, replacing the
/// current history entry.
pub(crate) fn replace_query(composition: &Composition) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let Ok(path) = window.location().pathname() else {
        return;
    };
    let query = query::encode(composition);
    let url = if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    };
    let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
}

/// Origin and path of the current document, for absolute share URLs.
pub(crate) fn origin_and_path() -> Result<(String, String)> {
    let window = web_sys::window().ok_or_else(|| TankaError::Dom("no window".to_string()))?;
    let location = window.location();
    let origin = location
        .origin()
        .map_err(|_| TankaError::Dom("origin unavailable".to_string()))?;
    let path = location
        .pathname()
        .map_err(|_| TankaError::Dom("pathname unavailable".to_string()))?;
    Ok((origin, path))
}
