//! Pure text layout for the composition display.
//!
//! Computes glyph/line positions and the padded canvas size for both
//! writing directions, independent of any rendering backend. Japanese
//! text here is effectively fixed-pitch (full-width glyphs), so advances
//! are derived from the font size rather than per-glyph measurement.

/// Logical width of the display container.
pub const CONTAINER_WIDTH: f32 = 672.0;
/// Minimum logical height of the display container.
pub const CONTAINER_MIN_HEIGHT: f32 = 360.0;
/// Inner padding between the container edge and the text block.
pub const CONTAINER_PADDING: f32 = 48.0;

/// Resolved text style, snapshotted once per render so the display and
/// the export rasterizer draw from identical inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// CSS font-family string.
    pub family: String,
    /// Font size in logical pixels.
    pub size: f32,
    /// CSS font weight.
    pub weight: u16,
    /// Line height as a multiplier of the font size.
    pub line_height: f32,
    /// Additional advance between characters, logical pixels.
    pub letter_spacing: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            family: crate::catalog::default_font().family.to_string(),
            size: 30.0,
            weight: 400,
            line_height: 1.75,
            letter_spacing: 2.0,
        }
    }
}

impl TextStyle {
    /// Pitch between characters along the writing direction.
    #[must_use]
    pub fn char_pitch(&self) -> f32 {
        self.size + self.letter_spacing
    }

    /// Pitch between lines (columns in vertical mode).
    #[must_use]
    pub fn line_pitch(&self) -> f32 {
        self.size * self.line_height
    }
}

/// A single character placed at its center point (vertical mode).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    pub ch: char,
    pub x: f32,
    pub y: f32,
}

/// A full line placed at its center point (horizontal mode).
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Placement of the text block, per writing direction.
#[derive(Debug, Clone, PartialEq)]
pub enum Arrangement {
    /// Columns laid right-to-left, characters stacked top-to-bottom.
    Vertical { glyphs: Vec<PlacedGlyph> },
    /// Lines stacked top-to-bottom, each centered horizontally.
    Horizontal { lines: Vec<PlacedLine> },
}

/// A computed layout: the container size plus every placement.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionLayout {
    pub width: f32,
    pub height: f32,
    pub arrangement: Arrangement,
}

/// Lay out `text` inside the fixed-width container.
///
/// The text block is centered in both axes; the container height grows
/// past [`CONTAINER_MIN_HEIGHT`] when the content needs it.
#[must_use]
pub fn layout_composition(text: &str, vertical: bool, style: &TextStyle) -> CompositionLayout {
    let lines: Vec<&str> = text.split('\n').collect();
    if vertical {
        layout_vertical(&lines, style)
    } else {
        layout_horizontal(&lines, style)
    }
}

fn layout_vertical(lines: &[&str], style: &TextStyle) -> CompositionLayout {
    let char_pitch = style.char_pitch();
    let col_pitch = style.line_pitch();
    let max_chars = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let content_width = lines.len() as f32 * col_pitch;
    let content_height = max_chars as f32 * char_pitch;
    let width = CONTAINER_WIDTH;
    let height = (content_height + 2.0 * CONTAINER_PADDING).max(CONTAINER_MIN_HEIGHT);

    // First line is the rightmost column.
    let right_edge = width / 2.0 + content_width / 2.0;
    let top = height / 2.0 - content_height / 2.0;

    let mut glyphs = Vec::new();
    for (col, line) in lines.iter().enumerate() {
        let x = right_edge - col as f32 * col_pitch - col_pitch / 2.0;
        for (row, ch) in line.chars().enumerate() {
            let y = top + row as f32 * char_pitch + char_pitch / 2.0;
            glyphs.push(PlacedGlyph { ch, x, y });
        }
    }

    CompositionLayout {
        width,
        height,
        arrangement: Arrangement::Vertical { glyphs },
    }
}

fn layout_horizontal(lines: &[&str], style: &TextStyle) -> CompositionLayout {
    let line_pitch = style.line_pitch();
    let content_height = lines.len() as f32 * line_pitch;
    let width = CONTAINER_WIDTH;
    let height = (content_height + 2.0 * CONTAINER_PADDING).max(CONTAINER_MIN_HEIGHT);

    let top = height / 2.0 - content_height / 2.0;
    let placed = lines
        .iter()
        .enumerate()
        .map(|(row, line)| PlacedLine {
            text: (*line).to_string(),
            x: width / 2.0,
            y: top + row as f32 * line_pitch + line_pitch / 2.0,
        })
        .collect();

    CompositionLayout {
        width,
        height,
        arrangement: Arrangement::Horizontal { lines: placed },
    }
}
