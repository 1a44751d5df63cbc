//! The image export pipeline.
//!
//! A single linear asynchronous sequence: wait for the font subsystem,
//! explicitly request the active family, wait a fixed settle interval,
//! rasterize the composition to an offscreen canvas at an oversampled
//! resolution, and deliver the PNG as a download or a clipboard image.
//! Only the font-instantiation step is allowed to fail silently; every
//! other failure aborts the export and surfaces once to the caller.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAnchorElement, HtmlCanvasElement};

use crate::composition::Composition;
use crate::error::{Result, TankaError};
use crate::layout::TextStyle;
use crate::render::{self, DrawRequest};

/// Oversampling factor for crisp output on high-density displays.
const EXPORT_PIXEL_RATIO: f32 = 2.0;
/// Fixed wait after font registration. There is no render-complete signal
/// from the engine, so layout/paint gets this long to catch up.
const SETTLE_DELAY_MS: i32 = 800;
/// Fixed download filename.
const EXPORT_FILENAME: &str = "tanka.png";

/// How the finished PNG reaches the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Same-document download as [`EXPORT_FILENAME`].
    Download,
    /// Clipboard image write.
    Clipboard,
}

/// Run the full export pipeline for `composition`.
///
/// `style` is the resolved display style, snapshotted by the caller, so
/// the capture cannot drift from what is on screen.
///
/// # Errors
/// Any step other than font instantiation failing aborts the export.
pub async fn produce(
    composition: &Composition,
    style: &TextStyle,
    delivery: Delivery,
) -> Result<()> {
    wait_fonts_ready().await?;
    request_font_load(&composition.font, style).await;
    wait_render_settle().await;
    let data_url = rasterize(composition, style)?;
    match delivery {
        Delivery::Download => trigger_download(&data_url),
        Delivery::Clipboard => copy_image_to_clipboard(&data_url).await,
    }
}

/// Await the engine's "fonts ready" signal.
async fn wait_fonts_ready() -> Result<()> {
    let ready = document()?.fonts().ready();
    JsFuture::from(ready)
        .await
        .map_err(|e| TankaError::Export(js_detail(&e)))?;
    Ok(())
}

/// Explicitly request the active family. Pre-declared local faces are not
/// loadable through this path, so failure is expected and non-fatal.
async fn request_font_load(family: &str, style: &TextStyle) {
    let Ok(document) = document() else {
        return;
    };
    let shorthand = format!("{} {}px {}", style.weight, style.size, family);
    if let Err(e) = JsFuture::from(document.fonts().load(&shorthand)).await {
        log::warn!("font load for {family} failed: {}", js_detail(&e));
    }
}

/// The single settle step: an unconditional fixed wait. Replace this with
/// a real readiness signal if the engine ever grows one.
async fn wait_render_settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                SETTLE_DELAY_MS,
            )
        });
        if !matches!(scheduled, Some(Ok(_))) {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// Render the composition onto a fresh offscreen canvas at the export
/// scale (overlay elements never appear: they are DOM, not canvas) and
/// encode it as a PNG data URL.
fn rasterize(composition: &Composition, style: &TextStyle) -> Result<String> {
    let canvas = document()?
        .create_element("canvas")
        .map_err(|e| TankaError::Dom(js_detail(&e)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| TankaError::Dom("canvas element".to_string()))?;

    let request = DrawRequest {
        text: &composition.text,
        placeholder: false,
        background: &composition.background,
        vertical: composition.vertical,
        style,
        scale: EXPORT_PIXEL_RATIO,
    };
    render::draw(&canvas, &request)?;

    canvas
        .to_data_url_with_type("image/png")
        .map_err(|e| TankaError::Export(js_detail(&e)))
}

/// Trigger a same-document download of the PNG.
fn trigger_download(data_url: &str) -> Result<()> {
    let anchor = document()?
        .create_element("a")
        .map_err(|e| TankaError::Dom(js_detail(&e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| TankaError::Dom("anchor element".to_string()))?;
    anchor.set_download(EXPORT_FILENAME);
    anchor.set_href(data_url);
    anchor.click();
    Ok(())
}

/// Write the PNG to the system clipboard as an image.
async fn copy_image_to_clipboard(data_url: &str) -> Result<()> {
    let bytes = png_bytes(data_url)?;
    let array = js_sys::Uint8Array::from(bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&array);

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| TankaError::Clipboard(js_detail(&e)))?;

    let record = js_sys::Object::new();
    js_sys::Reflect::set(&record, &JsValue::from_str("image/png"), &blob)
        .map_err(|e| TankaError::Clipboard(js_detail(&e)))?;
    let item = web_sys::ClipboardItem::new_with_record_from_str_to_blob_promise(
        &record.unchecked_into(),
    )
    .map_err(|e| TankaError::Clipboard(js_detail(&e)))?;

    let items = js_sys::Array::new();
    items.push(&item);

    let clipboard = window()?.navigator().clipboard();
    JsFuture::from(clipboard.write(&items))
        .await
        .map_err(|e| TankaError::Clipboard(js_detail(&e)))?;
    Ok(())
}

/// Strip the `data:image/png;base64,` prefix and decode the payload.
fn png_bytes(data_url: &str) -> Result<Vec<u8>> {
    let payload = data_url
        .split_once("base64,")
        .map(|(_, payload)| payload)
        .ok_or_else(|| TankaError::Export("unexpected data URL shape".to_string()))?;
    STANDARD
        .decode(payload)
        .map_err(|e| TankaError::Export(e.to_string()))
}

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| TankaError::Dom("no window".to_string()))
}

fn document() -> Result<web_sys::Document> {
    window()?
        .document()
        .ok_or_else(|| TankaError::Dom("no document".to_string()))
}

/// Human-readable detail from a thrown JS value.
pub(crate) fn js_detail(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
