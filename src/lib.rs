//! tankaview - tanka composer for the web
//!
//! Composes and styles Japanese short poems in the browser via WebAssembly
//! and Canvas 2D:
//! - Fixed catalogs of Japanese fonts and background washes
//! - Vertical (right-to-left) and horizontal writing
//! - Two-way address-bar synchronization for shareable URLs
//! - PNG export (download or clipboard) with best-effort font readiness
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { TankaView } from 'tankaview';
//! await init();
//! const view = new TankaView(canvas, window.devicePixelRatio);
//! view.set_notify_callback((kind, message) => toast(kind, message));
//! view.input_changed('秋の夜の\n月を見て');
//! ```

// Core modules (compile on every target)
pub mod catalog;
pub mod composition;
pub mod error;
pub mod export_state;
pub mod input;
pub mod layout;
pub mod query;
pub mod share;

// Browser modules (Canvas 2D display, export pipeline, DOM wiring)
#[cfg(target_arch = "wasm32")]
pub mod export;
#[cfg(target_arch = "wasm32")]
pub mod render;
#[cfg(target_arch = "wasm32")]
pub mod viewer;

use wasm_bindgen::prelude::*;

// Re-export the main viewer struct
#[cfg(target_arch = "wasm32")]
pub use viewer::TankaView;

pub use composition::Composition;

/// Decode a share URL (or bare query string) into a full composition:
/// defaults merged in, catalog validation applied.
///
/// # Errors
/// Returns an error if the result cannot be serialized for JavaScript.
#[wasm_bindgen]
pub fn parse_share_query(input: &str) -> Result<JsValue, JsValue> {
    let mut composition = Composition::default();
    query::decode(&share::extract_query(input)).apply_to(&mut composition);
    serde_wasm_bindgen::to_value(&composition)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// The font catalog as a JS array of `{name, value, family}`.
///
/// # Errors
/// Returns an error if the catalog cannot be serialized for JavaScript.
#[wasm_bindgen]
pub fn font_catalog() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(catalog::FONTS.as_slice())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// The background catalog as a JS array of `{token, from, to}`.
///
/// # Errors
/// Returns an error if the catalog cannot be serialized for JavaScript.
#[wasm_bindgen]
pub fn background_catalog() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(catalog::BACKGROUNDS.as_slice())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
