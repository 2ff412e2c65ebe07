//! Character encoding detection for saved product pages.
//!
//! Pages captured to disk keep the bytes the server sent. Regional storefronts
//! still serve legacy charsets (Shift_JIS, windows-1252), so the charset is
//! sniffed from `<meta>` declarations before parsing.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes of the page head searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Matches `<meta charset="...">`.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Matches `<meta http-equiv="Content-Type" content="text/html; charset=...">`.
#[allow(clippy::expect_used)]
static META_CONTENT_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
        .expect("valid regex")
});

/// Encoding declared in the first kilobyte of the page, UTF-8 if none.
#[must_use]
pub fn detect_encoding(page: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&page[..page.len().min(SNIFF_LEN)]);

    [&*META_CHARSET, &*META_CONTENT_TYPE]
        .into_iter()
        .filter_map(|re| re.captures(&head))
        .filter_map(|caps| caps.get(1))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode page bytes to UTF-8.
///
/// Invalid sequences become U+FFFD instead of failing.
///
/// # Examples
///
/// ```
/// use pdp_extract::encoding::decode_page;
///
/// let page = b"<meta charset=\"windows-1252\"><h1 id=\"title\">Caf\xE9 Grinder</h1>";
/// assert!(decode_page(page).contains("Café Grinder"));
/// ```
#[must_use]
pub fn decode_page(page: &[u8]) -> String {
    let encoding = detect_encoding(page);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(page).into_owned();
    }

    let (decoded, _, had_errors) = encoding.decode(page);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "page contained undecodable bytes");
    }
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{SHIFT_JIS, WINDOWS_1252};

    #[test]
    fn detect_meta_charset() {
        let page = br#"<html><head><meta charset="Shift_JIS"></head></html>"#;
        assert_eq!(detect_encoding(page), SHIFT_JIS);
    }

    #[test]
    fn detect_http_equiv_charset() {
        let page = br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        // The WHATWG encoding standard maps ISO-8859-1 to windows-1252
        assert_eq!(detect_encoding(page), WINDOWS_1252);
    }

    #[test]
    fn detect_defaults_to_utf8() {
        assert_eq!(detect_encoding(b"<html><body>plain</body></html>"), UTF_8);
        assert_eq!(detect_encoding(br#"<meta charset="no-such-charset">"#), UTF_8);
        assert_eq!(detect_encoding(b""), UTF_8);
    }

    #[test]
    fn declaration_past_sniff_window_is_ignored() {
        let mut page = vec![b' '; SNIFF_LEN];
        page.extend_from_slice(br#"<meta charset="Shift_JIS">"#);
        assert_eq!(detect_encoding(&page), UTF_8);
    }

    #[test]
    fn decode_windows_1252() {
        let page = b"<meta charset=\"windows-1252\"><span>\x80 19,99</span>";
        assert!(decode_page(page).contains("€ 19,99"));
    }

    #[test]
    fn decode_invalid_utf8_is_lossy() {
        let page = b"<h1>Mouse \xFF</h1>";
        assert!(decode_page(page).contains('\u{FFFD}'));
    }
}
