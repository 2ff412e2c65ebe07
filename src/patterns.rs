//! Compiled regex patterns and CSS hooks for product page extraction.
//!
//! All patterns are compiled once at first use via `LazyLock`.
//! Patterns are organized by the extractor that consumes them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace (spaces, tabs, newlines, NBSP) for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

// =============================================================================
// Numeric Patterns
// =============================================================================

/// Matches the first run of digits, commas and periods holding at least one
/// digit, with an optional `K` (thousands) suffix directly after it.
///
/// A bare `.` or `,` never matches on its own, so "Visit..." yields no number.
pub static NUMERIC_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<number>[\d.,]*\d)(?P<thousands>K)?").expect("NUMERIC_TEXT regex")
});

// =============================================================================
// Offer Patterns
// =============================================================================

/// Splits the abbreviated fulfilment block into shipper and seller.
///
/// Applied to whitespace-normalized text such as
/// `"Ships from: Amazon.com Sold by: Acme Inc."`.
pub static SHIPS_FROM_SOLD_BY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Ships from:\s*(?P<ships_from>.*?)\s+Sold by:\s*(?P<sold_by>.*)")
        .expect("SHIPS_FROM_SOLD_BY regex")
});

/// Pulls the six price keys, in order, out of the embedded price JSON.
///
/// `(?s)` lets the gaps between keys span newlines; the keys must appear in
/// exactly this order.
pub static PRICE_BLOB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?s)"displayPrice":"(?P<display_price>[^"]+)""#,
        r#".*?"priceAmount":(?P<price_amount>[\d.]+)"#,
        r#".*?"currencySymbol":"(?P<currency_symbol>[^"]+)""#,
        r#".*?"integerValue":"(?P<integer_value>\d+)""#,
        r#".*?"decimalSeparator":"(?P<decimal_separator>[^"]+)""#,
        r#".*?"fractionalValue":"(?P<fractional_value>\d+)""#,
    ))
    .expect("PRICE_BLOB regex")
});

// =============================================================================
// Page Hooks
// =============================================================================

/// `data-feature-name` of the fulfilment ("Ships from / Sold by") block.
pub const FEATURE_SHIPS_SOLD_BY: &str = "shipFromSoldByAbbreviated";

/// `data-feature-name` of the widget embedding the price JSON.
pub const FEATURE_PRICE: &str = "twisterPlusWWDesktop";

/// `data-feature-name` of the brand byline.
pub const FEATURE_BYLINE: &str = "bylineInfo";

/// `data-feature-name` of the breadcrumb trail.
pub const FEATURE_BREADCRUMBS: &str = "desktop-breadcrumbs";

/// `data-feature-name` of the "N bought in past month" faceout.
pub const FEATURE_SOCIAL_PROOF: &str = "socialProofingAsinFaceout";

/// Prefix the byline puts in front of brand store names.
pub const BYLINE_VISIT_PREFIX: &str = "Visit the ";
