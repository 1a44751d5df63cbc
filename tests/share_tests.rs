//! Share URL and post intent tests

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use tankaview::catalog::{BACKGROUNDS, FONTS};
use tankaview::composition::Composition;
use tankaview::query::decode;
use tankaview::share::{extract_query, post_intent_url, share_url};

fn sample() -> Composition {
    Composition {
        text: "秋の夜の\n月を見て".to_string(),
        font: FONTS[1].family.to_string(),
        background: BACKGROUNDS[2].token.to_string(),
        vertical: true,
    }
}

#[test]
fn test_share_url_shape() {
    let url = share_url("https://example.com", "/tanka/", &sample());
    assert!(url.starts_with("https://example.com/tanka/?"));
}

#[test]
fn test_share_url_carries_every_field() {
    let url = share_url("https://example.com", "/", &sample());
    for key in ["text=", "font=", "bg=", "vertical="] {
        assert!(url.contains(key), "share URL missing {key}: {url}");
    }
}

#[test]
fn test_share_url_reconstructs_equal_composition() {
    let original = sample();
    let url = share_url("https://example.com", "/", &original);
    let mut restored = Composition::default();
    decode(&extract_query(&url)).apply_to(&mut restored);
    assert_eq!(restored, original);
}

#[test]
fn test_post_intent_url_encodes_text_and_share_link() {
    let composition = sample();
    let share = share_url("https://example.com", "/", &composition);
    let intent = post_intent_url(&composition, &share);
    assert!(intent.starts_with("https://twitter.com/intent/tweet?"));
    assert!(intent.contains("text="));
    assert!(intent.contains("url=https%3A%2F%2Fexample.com"));
    // The poem must not leak unencoded into the intent URL
    let query = intent.split_once('?').unwrap().1;
    assert!(query.is_ascii(), "intent query must be percent-encoded");
}

// =============================================================================
// QUERY EXTRACTION
// =============================================================================

#[test]
fn test_extract_query_from_absolute_url() {
    assert_eq!(
        extract_query("https://example.com/path?font=x&bg=y"),
        "font=x&bg=y"
    );
}

#[test]
fn test_extract_query_from_bare_query() {
    assert_eq!(extract_query("font=x&bg=y"), "font=x&bg=y");
    assert_eq!(extract_query("?font=x&bg=y"), "font=x&bg=y");
}

#[test]
fn test_extract_query_from_url_without_query() {
    assert_eq!(extract_query("https://example.com/path"), "");
}
