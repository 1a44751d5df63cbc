//! Main `TankaView` struct - the primary entry point for the composer.
//!
//! This module provides the WASM-exported `TankaView` struct that handles:
//! - Owning the composition state and painting it to Canvas 2D
//! - Two-way address-bar synchronization (replaceState / popstate)
//! - IME-aware text input commits
//! - Share URL, post intent, and image export triggers
//!
//! The popstate listener is registered when the viewer is created and
//! stays installed for the page lifetime.

mod history;
mod overlay;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlDivElement, PopStateEvent};

use crate::catalog;
use crate::composition::{Composition, PLACEHOLDER};
use crate::error::TankaError;
use crate::export::{self, Delivery};
use crate::export_state::ExportState;
use crate::input::InputBuffer;
use crate::layout::TextStyle;
use crate::query;
use crate::render::{self, DrawRequest};
use crate::share;

/// Notification kinds passed to the toast callback.
const NOTIFY_SUCCESS: &str = "success";
const NOTIFY_ERROR: &str = "error";

/// Shared state that can be accessed by event handlers and async tasks.
pub(crate) struct SharedState {
    pub(crate) composition: Composition,
    pub(crate) input: InputBuffer,
    pub(crate) style: TextStyle,
    pub(crate) export: ExportState,
    pub(crate) dpr: f32,
    pub(crate) busy_overlay: Option<HtmlDivElement>,
    pub(crate) notify_callback: Option<Function>,
}

/// The main composer struct exported to JavaScript.
#[wasm_bindgen]
pub struct TankaView {
    state: Rc<RefCell<SharedState>>,
    canvas: HtmlCanvasElement,
    // Kept alive while the viewer exists; unregistered on drop
    popstate_closure: Closure<dyn FnMut(PopStateEvent)>,
}

impl Drop for TankaView {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "popstate",
                self.popstate_closure.as_ref().unchecked_ref(),
            );
        }
    }
}

#[wasm_bindgen]
impl TankaView {
    /// Create a new composer bound to the display canvas.
    ///
    /// Applies the current `location.search` to the initial state and
    /// registers the popstate listener, so pasted and back/forward URLs
    /// both restore the composition.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, dpr: f32) -> Result<TankaView, JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let mut composition = Composition::default();
        if let Some(search) = history::location_query() {
            query::decode(&search).apply_to(&mut composition);
        }
        let mut input = InputBuffer::default();
        input.sync(&composition.text);
        let style = TextStyle {
            family: composition.font.clone(),
            ..TextStyle::default()
        };

        let busy_overlay = overlay::create(&canvas);

        let state = Rc::new(RefCell::new(SharedState {
            composition,
            input,
            style,
            export: ExportState::default(),
            dpr,
            busy_overlay,
            notify_callback: None,
        }));

        let popstate_closure = {
            let state = state.clone();
            let canvas = canvas.clone();
            Closure::wrap(Box::new(move |_event: PopStateEvent| {
                Self::internal_popstate(&state, &canvas);
            }) as Box<dyn FnMut(PopStateEvent)>)
        };
        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback(
                "popstate",
                popstate_closure.as_ref().unchecked_ref(),
            );
        }

        Self::render_now(&state, &canvas);

        Ok(TankaView {
            state,
            canvas,
            popstate_closure,
        })
    }

    /// Register the notification callback: `(kind, message) => void`,
    /// where kind is `"success"` or `"error"`.
    pub fn set_notify_callback(&mut self, callback: Function) {
        self.state.borrow_mut().notify_callback = Some(callback);
    }

    /// Record a keystroke from the text field. Commits to the shared
    /// state (and the URL) unless an input composition sequence is
    /// active; the display mirrors every keystroke either way.
    pub fn input_changed(&mut self, value: &str) {
        let committed = {
            let mut s = self.state.borrow_mut();
            s.input.keystroke(value).map(ToString::to_string)
        };
        match committed {
            Some(text) => {
                Self::internal_update(&self.state, &self.canvas, move |c| c.set_text(&text));
            }
            None => Self::render_now(&self.state, &self.canvas),
        }
    }

    /// An input composition sequence started; commits pause.
    pub fn composition_started(&mut self) {
        self.state.borrow_mut().input.begin_composition();
    }

    /// The composition sequence finished; commit its final value.
    pub fn composition_ended(&mut self, value: &str) {
        let text = {
            let mut s = self.state.borrow_mut();
            s.input.end_composition(value).to_string()
        };
        Self::internal_update(&self.state, &self.canvas, move |c| c.set_text(&text));
    }

    /// Select a font by its catalog family string.
    pub fn set_font(&mut self, family: &str) {
        let family = catalog::font_by_family(family)
            .unwrap_or_else(catalog::default_font)
            .family
            .to_string();
        Self::internal_update(&self.state, &self.canvas, move |c| c.font = family);
    }

    /// Select a background by its catalog token.
    pub fn set_background(&mut self, token: &str) {
        let token = catalog::background_by_token(token)
            .unwrap_or_else(catalog::default_background)
            .token
            .to_string();
        Self::internal_update(&self.state, &self.canvas, move |c| c.background = token);
    }

    /// Switch between vertical and horizontal writing.
    pub fn set_vertical(&mut self, vertical: bool) {
        Self::internal_update(&self.state, &self.canvas, move |c| c.vertical = vertical);
    }

    /// Absolute share URL for the current composition.
    ///
    /// # Errors
    /// Returns an error if the document location is unavailable.
    pub fn share_url(&self) -> Result<String, JsValue> {
        let (origin, path) = history::origin_and_path()?;
        let s = self.state.borrow();
        Ok(share::share_url(&origin, &path, &s.composition))
    }

    /// Copy the share URL to the clipboard and report the outcome
    /// through the notification callback.
    pub fn copy_share_url(&self) {
        let url = match self.share_url() {
            Ok(url) => url,
            Err(_) => {
                Self::notify(&self.state, NOTIFY_ERROR, "URLのコピーに失敗しました");
                return;
            }
        };
        let state = self.state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match Self::write_text_to_clipboard(&url).await {
                Ok(()) => {
                    Self::notify(&state, NOTIFY_SUCCESS, "共有用URLをコピーしました");
                }
                Err(e) => {
                    log::error!("share URL copy failed: {e}");
                    Self::notify(&state, NOTIFY_ERROR, "URLのコピーに失敗しました");
                }
            }
        });
    }

    /// Open the pre-filled social post in a new browsing context.
    pub fn open_post_intent(&self) {
        let Ok(url) = self.share_url() else {
            return;
        };
        let intent = {
            let s = self.state.borrow();
            share::post_intent_url(&s.composition, &url)
        };
        Self::open_url(&intent);
    }

    /// Export the composition as a PNG download. Inert while a previous
    /// export is still running.
    pub fn export_download(&self) {
        Self::spawn_export(&self.state, Delivery::Download);
    }

    /// Copy the exported PNG to the clipboard. Inert while busy.
    pub fn export_clipboard(&self) {
        Self::spawn_export(&self.state, Delivery::Clipboard);
    }

    /// Whether an export is currently in flight.
    #[must_use]
    pub fn is_exporting(&self) -> bool {
        self.state.borrow().export.is_busy()
    }

    /// Current composition as a JS object.
    ///
    /// # Errors
    /// Returns an error if the state cannot be serialized for JavaScript.
    pub fn composition(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.state.borrow().composition)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    // ------------------------------------------------------------------
    // Internal helpers
    // ------------------------------------------------------------------

    /// Single update path: mutate, mirror into the address bar, repaint.
    fn internal_update(
        state: &Rc<RefCell<SharedState>>,
        canvas: &HtmlCanvasElement,
        mutate: impl FnOnce(&mut Composition),
    ) {
        {
            let mut s = state.borrow_mut();
            mutate(&mut s.composition);
            s.style.family = s.composition.font.clone();
            let text = s.composition.text.clone();
            s.input.sync(&text);
            history::replace_query(&s.composition);
        }
        Self::render_now(state, canvas);
    }

    /// Re-derive state from the URL at this instant; in-memory edits not
    /// yet reflected in the URL are discarded (last navigation wins).
    pub(crate) fn internal_popstate(state: &Rc<RefCell<SharedState>>, canvas: &HtmlCanvasElement) {
        {
            let mut s = state.borrow_mut();
            if let Some(search) = history::location_query() {
                query::decode(&search).apply_to(&mut s.composition);
            }
            s.style.family = s.composition.font.clone();
            let text = s.composition.text.clone();
            s.input.sync(&text);
        }
        Self::render_now(state, canvas);
    }

    fn render_now(state: &Rc<RefCell<SharedState>>, canvas: &HtmlCanvasElement) {
        let s = state.borrow();
        let display_text = s.input.display();
        let placeholder = display_text.is_empty();
        let request = DrawRequest {
            text: if placeholder { PLACEHOLDER } else { display_text },
            placeholder,
            background: &s.composition.background,
            vertical: s.composition.vertical,
            style: &s.style,
            scale: s.dpr,
        };
        if let Err(e) = render::draw(canvas, &request) {
            log::error!("display render failed: {e}");
        }
    }

    fn spawn_export(state: &Rc<RefCell<SharedState>>, delivery: Delivery) {
        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            Self::run_export(state, delivery).await;
        });
    }

    async fn run_export(state: Rc<RefCell<SharedState>>, delivery: Delivery) {
        let (composition, style, busy_overlay) = {
            let mut s = state.borrow_mut();
            if !s.export.begin() {
                // A second trigger while busy is a no-op
                return;
            }
            (s.composition.clone(), s.style.clone(), s.busy_overlay.clone())
        };
        overlay::set_visible(busy_overlay.as_ref(), true);

        let result = export::produce(&composition, &style, delivery).await;

        // The busy state always clears, success or failure
        state.borrow_mut().export.finish();
        overlay::set_visible(busy_overlay.as_ref(), false);

        match result {
            Ok(()) => {
                let message = match delivery {
                    Delivery::Download => "画像を保存しました",
                    Delivery::Clipboard => "画像をコピーしました",
                };
                Self::notify(&state, NOTIFY_SUCCESS, message);
            }
            Err(e) => {
                log::error!("image export failed: {e}");
                Self::notify(
                    &state,
                    NOTIFY_ERROR,
                    "画像の生成に失敗しました。ブラウザをリロードして再度お試しください。",
                );
            }
        }
    }

    async fn write_text_to_clipboard(text: &str) -> crate::error::Result<()> {
        let window =
            web_sys::window().ok_or_else(|| TankaError::Dom("no window".to_string()))?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| TankaError::Clipboard(export::js_detail(&e)))?;
        Ok(())
    }

    fn notify(state: &Rc<RefCell<SharedState>>, kind: &str, message: &str) {
        let callback = state.borrow().notify_callback.clone();
        if let Some(callback) = callback {
            let _ = callback.call2(
                &JsValue::NULL,
                &JsValue::from_str(kind),
                &JsValue::from_str(message),
            );
        }
    }

    pub(crate) fn open_url(url: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
}
