//! Input validation predicates and URL rewriting helpers.

use url::form_urlencoded;

/// Longest long URL accepted for storage.
pub const MAX_LONG_URL_LEN: usize = 255;

/// Longest short ID accepted for lookup.
pub const MAX_SHORT_ID_LEN: usize = 20;

/// Search-redirect prefix used by the `google` action.
const SEARCH_REDIRECT_PREFIX: &str = "http://lmgtfy.com/?q=";

/// Percent-encodes a value for use in a query string.
///
/// Uses form encoding: spaces become `+`, everything except ASCII
/// alphanumerics and `*-._` is percent-encoded.
pub fn query_escape(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Returns true if the URL starts with `http://` or `https://`.
///
/// The check is a plain prefix match; no further parsing is attempted.
pub fn has_known_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Returns true if the long URL fits the storage bound.
pub fn long_url_fits(url: &str) -> bool {
    url.len() <= MAX_LONG_URL_LEN
}

/// Returns true if the short ID fits the lookup bound.
pub fn short_id_fits(short_id: &str) -> bool {
    short_id.len() <= MAX_SHORT_ID_LEN
}

/// Wraps `url` in a search-redirect URL.
pub fn search_redirect(url: &str) -> String {
    format!("{SEARCH_REDIRECT_PREFIX}{}", query_escape(url))
}
