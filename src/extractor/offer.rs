//! Offer extractors: fulfilment, variations and price.

use dom_query::Selection;

use crate::access::{self, Query};
use crate::patterns::{FEATURE_PRICE, FEATURE_SHIPS_SOLD_BY, PRICE_BLOB, SHIPS_FROM_SOLD_BY};
use crate::result::{PriceData, PriceRecord};
use crate::text::{extract_int, normalize_whitespace};

/// Shipper and seller from the abbreviated fulfilment block.
///
/// Returns `(None, None)` when the block is missing or does not read
/// "Ships from: .. Sold by: ..".
#[must_use]
pub fn extract_ships_and_seller(root: Option<&Selection>) -> (Option<String>, Option<String>) {
    access::find_text(root, &Query::feature(FEATURE_SHIPS_SOLD_BY))
        .as_deref()
        .and_then(parse_ships_and_seller)
        .unzip()
}

/// Split "Ships from: <A> Sold by: <B>" into `(A, B)`.
#[must_use]
pub fn parse_ships_and_seller(text: &str) -> Option<(String, String)> {
    let caps = SHIPS_FROM_SOLD_BY.captures(text)?;
    Some((
        normalize_whitespace(&caps["ships_from"]),
        normalize_whitespace(&caps["sold_by"]),
    ))
}

/// Total number of variations (sizes, colors, ..), `0` when not shown.
#[must_use]
pub fn extract_variations_count(root: Option<&Selection>) -> i64 {
    let raw = access::find_attr(
        root,
        &Query::tag("div").has_attr("data-totalvariationcount"),
        "data-totalvariationcount",
    );
    extract_int(raw.as_deref(), false).unwrap_or(0)
}

/// Price record from the JSON embedded in the pricing widget.
///
/// Empty when the widget is missing or its text lacks any of the six keys.
#[must_use]
pub fn extract_price(root: Option<&Selection>) -> PriceRecord {
    access::find_raw_text(root, &Query::feature(FEATURE_PRICE))
        .map(|blob| parse_price_blob(&blob))
        .unwrap_or_default()
}

/// Parse the six price keys out of a price blob.
///
/// The keys `displayPrice`, `priceAmount`, `currencySymbol`, `integerValue`,
/// `decimalSeparator` and `fractionalValue` must all appear, in that order;
/// anything may sit between them. The first complete sequence wins.
///
/// # Example
///
/// ```rust
/// use pdp_extract::extractor::offer::parse_price_blob;
///
/// let blob = r#"{"displayPrice":"$19.99","priceAmount":19.99,"currencySymbol":"$",
///     "integerValue":"19","decimalSeparator":".","fractionalValue":"99"}"#;
/// let price = parse_price_blob(blob);
/// assert_eq!(price.amount(), Some(19.99));
///
/// assert!(parse_price_blob(r#"{"displayPrice":"$19.99"}"#).is_empty());
/// ```
#[must_use]
pub fn parse_price_blob(blob: &str) -> PriceRecord {
    let Some(caps) = PRICE_BLOB.captures(blob) else {
        return PriceRecord::empty();
    };

    let (Ok(price_amount), Ok(integer_value), Ok(fractional_value)) = (
        caps["price_amount"].parse::<f64>(),
        caps["integer_value"].parse::<i64>(),
        caps["fractional_value"].parse::<i64>(),
    ) else {
        return PriceRecord::empty();
    };

    PriceData {
        display_price: caps["display_price"].to_string(),
        price_amount,
        currency_symbol: caps["currency_symbol"].to_string(),
        integer_value,
        decimal_separator: caps["decimal_separator"].to_string(),
        fractional_value,
    }
    .into()
}
