//! # pdp-extract
//!
//! Structured field extraction from rendered product detail pages.
//!
//! Given the page URL and its parsed markup, this library builds one flat
//! [`ProductRecord`]: title, identifier, merchant, price, review stats and
//! the presence of the page's secondary content modules. Extraction is a
//! single synchronous pass over an immutable document.
//!
//! ## Quick Start
//!
//! ```rust
//! use pdp_extract::{dom, extract_product};
//!
//! let html = r#"<div id="dp-container">
//!     <h1 id="title">Acme Wireless Mouse</h1>
//!     <input type="hidden" id="ASIN" value="B000TEST01">
//! </div>"#;
//!
//! let doc = dom::parse(html);
//! let record = extract_product("https://www.example.com/dp/B000TEST01?th=1", &doc);
//!
//! assert_eq!(record.url, "https://www.example.com/dp/B000TEST01");
//! assert_eq!(record.title.as_deref(), Some("Acme Wireless Mouse"));
//! // No price on the page, so the page is not a valid product page.
//! assert!(!record.success);
//! ```
//!
//! ## Missing structure
//!
//! Extraction never fails. Every field falls back to `None`, `false`, `0`
//! or an empty list when its part of the page is missing, and
//! [`ProductRecord::success`] reports whether the page looked like a real
//! product page (container, title, ASIN and a price present).

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM adapter over `dom_query`.
pub mod dom;

/// Null-tolerant page lookups.
pub mod access;

/// Whitespace normalization and numeric parsing.
pub mod text;

/// Per-field extractors.
pub mod extractor;

/// Success rule for assembled records.
pub mod validation;

/// URL utilities.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use dom_query::Document;
pub use error::{Error, Result};
pub use options::Options;
pub use result::{PriceData, PriceRecord, ProductRecord, RatingsHistogram};

/// Extracts a product record from a parsed page using default options.
///
/// # Arguments
///
/// * `url` - The page URL; query string and fragment are dropped
/// * `doc` - The parsed page
///
/// # Example
///
/// ```rust
/// use pdp_extract::{dom, extract_product};
///
/// let doc = dom::parse("<html><body>Page not found</body></html>");
/// let record = extract_product("https://www.example.com/dp/B000TEST01", &doc);
/// assert!(!record.success);
/// assert!(record.price_data.is_empty());
/// ```
#[must_use]
pub fn extract_product(url: &str, doc: &Document) -> ProductRecord {
    extract_product_with_options(url, doc, &Options::default())
}

/// Extracts a product record from a parsed page with custom options.
///
/// # Example
///
/// ```rust
/// use pdp_extract::{dom, extract_product_with_options, Options};
///
/// let doc = dom::parse("<html><body></body></html>");
/// let options = Options {
///     include_review_histogram: true,
///     ..Options::default()
/// };
/// let record = extract_product_with_options("https://www.example.com/dp/X", &doc, &options);
/// assert!(record.ratings_histogram.is_some());
/// ```
#[must_use]
pub fn extract_product_with_options(url: &str, doc: &Document, options: &Options) -> ProductRecord {
    extract::extract_record(url, doc, options)
}

/// Parses `html` and extracts a product record with custom options.
#[must_use]
pub fn extract_product_html(url: &str, html: &str, options: &Options) -> ProductRecord {
    let doc = dom::parse(html);
    extract_product_with_options(url, &doc, options)
}

/// Extracts a product record from raw page bytes with automatic encoding detection.
///
/// The charset is read from `<meta charset>` or `http-equiv` declarations,
/// defaulting to UTF-8. Invalid characters are replaced with U+FFFD.
///
/// # Example
///
/// ```rust
/// use pdp_extract::{extract_product_bytes, Options};
///
/// let page = b"<meta charset=\"ISO-8859-1\"><h1 id=\"title\">Caf\xE9 Grinder</h1>";
/// let record = extract_product_bytes("https://www.example.com/dp/X", page, &Options::default());
/// assert_eq!(record.title.as_deref(), Some("Café Grinder"));
/// ```
#[must_use]
pub fn extract_product_bytes(url: &str, page: &[u8], options: &Options) -> ProductRecord {
    let html = encoding::decode_page(page);
    extract_product_html(url, &html, options)
}
