//! Turning raw homepage links into absolute article URLs.

use once_cell::sync::Lazy;
use regex::Regex;

/// Scheme, authority, a slash, and at least one path character.
static WELL_FORMED_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://.+/.+$").expect("well-formed link pattern is valid")
});

/// Resolve `link` against `host`.
///
/// Absolute links come back unchanged, root-relative links are appended to
/// the host as-is, and anything else is joined with a `/`. No other
/// normalization happens.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(resolve("http://example.com", "story/1"), "http://example.com/story/1");
/// assert_eq!(resolve("http://example.com", "/story/1"), "http://example.com/story/1");
/// assert_eq!(resolve("http://example.com", "https://other.com/x/y"), "https://other.com/x/y");
/// ```
pub fn resolve(host: &str, link: &str) -> String {
    if WELL_FORMED_LINK.is_match(link) {
        link.to_string()
    } else if link.starts_with('/') {
        format!("{host}{link}")
    } else {
        format!("{host}/{link}")
    }
}
