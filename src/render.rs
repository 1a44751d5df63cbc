//! Canvas 2D rendering of the composition.
//!
//! One draw path serves both the live display and the export rasterizer;
//! the only difference between them is the target canvas and the scale
//! factor. The background is always filled explicitly so captures never
//! depend on ambient page styling.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::catalog;
use crate::error::{Result, TankaError};
use crate::layout::{layout_composition, Arrangement, CompositionLayout, TextStyle};

/// Ink color for committed text.
const INK: &str = "#1f2937";
/// Ink color for the empty-state placeholder.
const PLACEHOLDER_INK: &str = "#9ca3af";

/// Everything the backend needs to paint one frame.
pub struct DrawRequest<'a> {
    /// Text to draw (the caller substitutes the placeholder when empty).
    pub text: &'a str,
    /// Draw in the muted placeholder ink.
    pub placeholder: bool,
    /// Background catalog token; unknown tokens fall back to the default.
    pub background: &'a str,
    /// Vertical right-to-left flow when true.
    pub vertical: bool,
    /// Resolved text style.
    pub style: &'a TextStyle,
    /// Device pixels per logical pixel for this surface.
    pub scale: f32,
}

/// Lay out and paint `request` onto `canvas`, resizing it to fit.
///
/// # Errors
/// Returns an error if the 2D context cannot be acquired.
pub fn draw(canvas: &HtmlCanvasElement, request: &DrawRequest<'_>) -> Result<CompositionLayout> {
    let layout = layout_composition(request.text, request.vertical, request.style);
    size_surface(canvas, &layout, request.scale);

    let ctx = context_2d(canvas)?;
    ctx.save();
    let _ = ctx.scale(f64::from(request.scale), f64::from(request.scale));
    fill_background(&ctx, request.background, &layout);
    draw_text(&ctx, request, &layout);
    ctx.restore();
    Ok(layout)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|_| TankaError::Render("failed to get 2d context".to_string()))?
        .ok_or_else(|| TankaError::Render("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| TankaError::Render("unexpected context type".to_string()))
}

/// Size the backing store in device pixels and pin the CSS size to the
/// logical layout so the canvas displays at 1x regardless of scale.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn size_surface(canvas: &HtmlCanvasElement, layout: &CompositionLayout, scale: f32) {
    let w_px = (f64::from(layout.width) * f64::from(scale)).round().max(1.0) as u32;
    let h_px = (f64::from(layout.height) * f64::from(scale)).round().max(1.0) as u32;
    canvas.set_width(w_px);
    canvas.set_height(h_px);

    let style = canvas.style();
    let _ = style.set_property("width", &format!("{}px", layout.width));
    let _ = style.set_property("height", &format!("{}px", layout.height));
}

fn fill_background(ctx: &CanvasRenderingContext2d, token: &str, layout: &CompositionLayout) {
    let background = catalog::background_by_token(token)
        .unwrap_or_else(catalog::default_background);
    let gradient = ctx.create_linear_gradient(
        0.0,
        0.0,
        f64::from(layout.width),
        f64::from(layout.height),
    );
    let _ = gradient.add_color_stop(0.0, background.from);
    let _ = gradient.add_color_stop(1.0, background.to);
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(
        0.0,
        0.0,
        f64::from(layout.width),
        f64::from(layout.height),
    );
}

fn draw_text(
    ctx: &CanvasRenderingContext2d,
    request: &DrawRequest<'_>,
    layout: &CompositionLayout,
) {
    let style = request.style;
    ctx.set_font(&format!(
        "{} {}px {}",
        style.weight, style.size, style.family
    ));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(if request.placeholder {
        PLACEHOLDER_INK
    } else {
        INK
    });

    let mut scratch = String::new();
    match &layout.arrangement {
        Arrangement::Vertical { glyphs } => {
            for glyph in glyphs {
                scratch.clear();
                scratch.push(glyph.ch);
                let _ = ctx.fill_text(&scratch, f64::from(glyph.x), f64::from(glyph.y));
            }
        }
        Arrangement::Horizontal { lines } => {
            for line in lines {
                let _ = ctx.fill_text(&line.text, f64::from(line.x), f64::from(line.y));
            }
        }
    }
}
