//! Product identity extractors.

use dom_query::Selection;

use crate::access::{self, Query};
use crate::patterns::{BYLINE_VISIT_PREFIX, FEATURE_BREADCRUMBS, FEATURE_BYLINE};
use crate::text::normalize_whitespace;
use crate::url_utils::strip_url_args;

/// Whether the page's primary content container (`div#dp-container`) exists.
#[must_use]
pub fn primary_container_exists(root: Option<&Selection>) -> bool {
    access::exists(root, &Query::tag("div").id("dp-container"))
}

/// Product title from `h1#title`.
#[must_use]
pub fn extract_title(root: Option<&Selection>) -> Option<String> {
    access::find_text(root, &Query::tag("h1").id("title"))
}

/// Product identifier from the hidden `ASIN` input.
#[must_use]
pub fn extract_asin(root: Option<&Selection>) -> Option<String> {
    hidden_input(root, "ASIN")
}

/// Whether the hidden merchant-exclusivity flag is exactly `"1"`.
#[must_use]
pub fn extract_merchant_exclusive(root: Option<&Selection>) -> bool {
    hidden_input(root, "isMerchantExclusive").as_deref() == Some("1")
}

#[must_use]
pub fn extract_merchant_id(root: Option<&Selection>) -> Option<String> {
    hidden_input(root, "merchantID")
}

/// Store id; an empty value counts as absent.
#[must_use]
pub fn extract_store_id(root: Option<&Selection>) -> Option<String> {
    hidden_input(root, "storeID").filter(|id| !id.is_empty())
}

fn hidden_input(root: Option<&Selection>, id: &str) -> Option<String> {
    access::find_attr(root, &Query::tag("input").id(id), "value")
}

/// Brand byline text and brand store link.
///
/// The text drops the "Visit the " prefix ("Visit the Acme Store" becomes
/// "Acme Store"). The link is the first anchor's `href` without its query
/// string.
#[must_use]
pub fn extract_byline(root: Option<&Selection>) -> (Option<String>, Option<String>) {
    let byline = access::find_one(root, &Query::feature(FEATURE_BYLINE));

    let text = byline.as_ref().map(|el| {
        let text = normalize_whitespace(&el.text());
        normalize_whitespace(&text.replace(BYLINE_VISIT_PREFIX, ""))
    });
    let link = access::find_attr(byline.as_ref(), &Query::tag("a"), "href")
        .map(|href| strip_url_args(&href));

    (text, link)
}

/// Breadcrumb trail split on `separator`.
///
/// Entries are trimmed and empty entries dropped, so `"Home › Phones ›"`
/// yields `["Home", "Phones"]`. Empty when the trail is missing.
#[must_use]
pub fn extract_breadcrumbs(root: Option<&Selection>, separator: char) -> Vec<String> {
    access::find_text(root, &Query::feature(FEATURE_BREADCRUMBS))
        .map(|trail| {
            trail
                .split(separator)
                .map(str::trim)
                .filter(|crumb| !crumb.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
