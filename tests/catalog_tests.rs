//! Catalog tests
//!
//! The catalogs are fixed and compiled in; the first entry of each is the
//! default used as the validation fallback.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use std::collections::HashSet;

use tankaview::catalog::{
    background_by_token, default_background, default_font, font_by_family, BACKGROUNDS, FONTS,
};

#[test]
fn test_defaults_are_first_entries() {
    assert_eq!(default_font(), FONTS[0]);
    assert_eq!(default_background(), BACKGROUNDS[0]);
}

#[test]
fn test_every_font_is_found_by_family() {
    for font in FONTS {
        assert_eq!(
            font_by_family(font.family),
            Some(font),
            "lookup failed for {}",
            font.name
        );
    }
}

#[test]
fn test_every_background_is_found_by_token() {
    for background in BACKGROUNDS {
        assert_eq!(background_by_token(background.token), Some(background));
    }
}

#[test]
fn test_unknown_identifiers_resolve_to_none() {
    assert_eq!(font_by_family("Comic Sans"), None);
    assert_eq!(font_by_family(""), None);
    assert_eq!(background_by_token("neon"), None);
    assert_eq!(background_by_token(""), None);
}

#[test]
fn test_identifiers_are_unique() {
    let families: HashSet<&str> = FONTS.iter().map(|f| f.family).collect();
    assert_eq!(families.len(), FONTS.len(), "font families must be unique");
    let values: HashSet<&str> = FONTS.iter().map(|f| f.value).collect();
    assert_eq!(values.len(), FONTS.len(), "font ids must be unique");
    let tokens: HashSet<&str> = BACKGROUNDS.iter().map(|b| b.token).collect();
    assert_eq!(tokens.len(), BACKGROUNDS.len(), "bg tokens must be unique");
}

#[test]
fn test_font_families_are_css_strings() {
    for font in FONTS {
        assert!(!font.name.is_empty());
        assert!(
            font.family.starts_with('"'),
            "family should quote the primary face: {}",
            font.family
        );
        assert!(font.family.ends_with("serif"));
    }
}

#[test]
fn test_background_colors_are_hex() {
    for background in BACKGROUNDS {
        for color in [background.from, background.to] {
            assert!(color.starts_with('#') && color.len() == 7, "bad color {color}");
            assert!(
                color[1..].chars().all(|c| c.is_ascii_hexdigit()),
                "bad color {color}"
            );
        }
    }
}
