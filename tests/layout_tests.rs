//! Text layout tests
//!
//! Geometry of vertical (columns right-to-left) and horizontal (centered
//! lines) placement, and container sizing.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use tankaview::layout::{
    layout_composition, Arrangement, PlacedGlyph, TextStyle, CONTAINER_MIN_HEIGHT,
    CONTAINER_PADDING, CONTAINER_WIDTH,
};

fn style() -> TextStyle {
    TextStyle::default()
}

fn vertical_glyphs(text: &str) -> Vec<PlacedGlyph> {
    match layout_composition(text, true, &style()).arrangement {
        Arrangement::Vertical { glyphs } => glyphs,
        Arrangement::Horizontal { .. } => panic!("expected vertical arrangement"),
    }
}

// =============================================================================
// VERTICAL MODE
// =============================================================================

#[test]
fn test_vertical_places_every_character() {
    let glyphs = vertical_glyphs("秋の夜の\n月を見て");
    assert_eq!(glyphs.len(), 8, "one placement per character");
}

#[test]
fn test_vertical_columns_run_right_to_left() {
    let glyphs = vertical_glyphs("一行\n二行");
    let first_col_x = glyphs[0].x;
    let second_col_x = glyphs[2].x;
    assert!(
        first_col_x > second_col_x,
        "first line must be the rightmost column ({first_col_x} vs {second_col_x})"
    );
}

#[test]
fn test_vertical_characters_stack_downward() {
    let glyphs = vertical_glyphs("秋の夜");
    assert!(glyphs[0].y < glyphs[1].y && glyphs[1].y < glyphs[2].y);
    assert_eq!(glyphs[0].x, glyphs[1].x, "same line shares one column");
    let pitch = glyphs[1].y - glyphs[0].y;
    assert_eq!(pitch, style().char_pitch(), "stacking uses the char pitch");
}

#[test]
fn test_vertical_column_pitch() {
    let glyphs = vertical_glyphs("一\n二");
    assert_eq!(glyphs[0].x - glyphs[1].x, style().line_pitch());
}

#[test]
fn test_vertical_height_grows_with_longest_line() {
    let short = layout_composition("短い", true, &style());
    let tall_text: String = "あ".repeat(20);
    let tall = layout_composition(&tall_text, true, &style());
    assert!(tall.height > short.height);
    assert_eq!(
        tall.height,
        20.0 * style().char_pitch() + 2.0 * CONTAINER_PADDING
    );
}

// =============================================================================
// HORIZONTAL MODE
// =============================================================================

#[test]
fn test_horizontal_lines_stack_in_order() {
    let layout = layout_composition("一行目\n二行目\n三行目", false, &style());
    let Arrangement::Horizontal { lines } = layout.arrangement else {
        panic!("expected horizontal arrangement");
    };
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].text, "一行目");
    assert!(lines[0].y < lines[1].y && lines[1].y < lines[2].y);
}

#[test]
fn test_horizontal_lines_are_centered() {
    let layout = layout_composition("月", false, &style());
    let Arrangement::Horizontal { lines } = layout.arrangement else {
        panic!("expected horizontal arrangement");
    };
    assert_eq!(lines[0].x, CONTAINER_WIDTH / 2.0);
}

// =============================================================================
// CONTAINER SIZING
// =============================================================================

#[test]
fn test_container_width_is_fixed() {
    for (text, vertical) in [("", true), ("歌", false), ("長い\n歌\nです", true)] {
        let layout = layout_composition(text, vertical, &style());
        assert_eq!(layout.width, CONTAINER_WIDTH);
    }
}

#[test]
fn test_short_content_keeps_minimum_height() {
    let layout = layout_composition("月", true, &style());
    assert_eq!(layout.height, CONTAINER_MIN_HEIGHT);
}

#[test]
fn test_empty_text_lays_out_without_glyphs() {
    let glyphs = vertical_glyphs("");
    assert!(glyphs.is_empty());
}
