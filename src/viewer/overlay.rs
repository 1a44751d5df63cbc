//! Busy overlay shown over the display while an export runs.
//!
//! The overlay is plain DOM on top of the canvas, so the export capture
//! (which renders to its own offscreen surface) can never include it.

use wasm_bindgen::JsCast;
use web_sys::{HtmlDivElement, HtmlElement};

/// Build the hidden overlay next to `canvas`. Returns `None` when the
/// DOM is not available; the viewer then simply runs without a spinner.
pub(crate) fn create(canvas: &web_sys::HtmlCanvasElement) -> Option<HtmlDivElement> {
    let document = web_sys::window()?.document()?;
    let parent = canvas.parent_element()?;

    // Ensure parent positions the absolute overlay
    if let Some(parent_el) = parent.dyn_ref::<HtmlElement>() {
        let parent_style = parent_el.style();
        if parent_style
            .get_property_value("position")
            .unwrap_or_default()
            .is_empty()
        {
            let _ = parent_style.set_property("position", "relative");
        }
    }

    let element = document
        .create_element("div")
        .ok()?
        .dyn_into::<HtmlDivElement>()
        .ok()?;
    let style = element.style();
    let _ = style.set_property("position", "absolute");
    let _ = style.set_property("inset", "0");
    let _ = style.set_property("display", "none");
    let _ = style.set_property("align-items", "center");
    let _ = style.set_property("justify-content", "center");
    let _ = style.set_property("background", "rgba(255, 255, 255, 0.8)");
    let _ = style.set_property("z-index", "10");
    let _ = style.set_property("font-family", "\"Shippori Mincho\", serif");
    let _ = style.set_property("color", "#374151");
    element.set_text_content(Some("画像を生成中..."));

    parent.append_child(&element).ok()?;
    Some(element)
}

/// Show or hide the overlay.
pub(crate) fn set_visible(element: Option<&HtmlDivElement>, visible: bool) {
    if let Some(element) = element {
        let _ = element
            .style()
            .set_property("display", if visible { "flex" } else { "none" });
    }
}
