//! Structured error types for tankaview.

/// All errors that can occur while encoding, rendering, or exporting.
#[derive(Debug, thiserror::Error)]
pub enum TankaError {
    /// A required DOM object was missing or of the wrong type.
    #[error("DOM access: {0}")]
    Dom(String),

    /// Canvas rendering failure.
    #[error("Render error: {0}")]
    Render(String),

    /// Export pipeline failure (rasterization, delivery).
    #[error("Export error: {0}")]
    Export(String),

    /// Clipboard write failure.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TankaError>;

impl From<String> for TankaError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for TankaError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<TankaError> for wasm_bindgen::JsValue {
    fn from(e: TankaError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
