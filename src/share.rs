//! Share URL construction and the external post intent.

use url::form_urlencoded;
use url::Url;

use crate::composition::Composition;
use crate::query;

/// Build the absolute share URL: origin + path + the full query string.
#[must_use]
pub fn share_url(origin: &str, path: &str, composition: &Composition) -> String {
    format!("{origin}{path}?{}", query::encode_full(composition))
}

/// Build a pre-filled social post URL carrying the poem text and the
/// canonical share URL. Opened in a new browsing context by the viewer.
#[must_use]
pub fn post_intent_url(composition: &Composition, share_url: &str) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.append_pair("text", &composition.text);
    serializer.append_pair("url", share_url);
    format!("https://twitter.com/intent/tweet?{}", serializer.finish())
}

/// Extract the query-string portion of a share URL, or pass a bare query
/// (with or without the leading `?`) through unchanged.
#[must_use]
pub fn extract_query(input: &str) -> String {
    match Url::parse(input) {
        Ok(url) => url.query().unwrap_or("").to_string(),
        Err(_) => input.strip_prefix('?').unwrap_or(input).to_string(),
    }
}
