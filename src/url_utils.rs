//! URL utility functions.
//!
//! Product URLs arrive carrying tracking parameters (`?ref=..`, `#customerReviews`).
//! Records store them stripped down to scheme, host and path.

/// Remove the query string and fragment from a URL.
///
/// The input is cut at the first `?` or `#`. Scheme, host and path are kept
/// byte-for-byte: no case folding, dot-segment resolution or percent-encoding.
///
/// # Example
///
/// ```rust
/// use pdp_extract::url_utils::strip_url_args;
///
/// assert_eq!(
///     strip_url_args("https://www.example.com/dp/B000TEST01?th=1#reviews"),
///     "https://www.example.com/dp/B000TEST01"
/// );
/// assert_eq!(strip_url_args("/stores/Acme/page/1?ref_=bl"), "/stores/Acme/page/1");
/// ```
#[must_use]
pub fn strip_url_args(url_str: &str) -> String {
    let url_str = url_str.trim();
    let end = url_str.find(['?', '#']).unwrap_or(url_str.len());
    url_str[..end].to_string()
}
