//! Review and social-proof extractors.

use dom_query::Selection;

use crate::access::{self, Query};
use crate::dom;
use crate::patterns::FEATURE_SOCIAL_PROOF;
use crate::text::{extract_float, extract_int};

/// Average star rating from "4.5 out of 5".
#[must_use]
pub fn extract_avg_review_stars(root: Option<&Selection>) -> Option<f64> {
    let text = access::find_text(root, &Query::tag("span").attr("data-hook", "rating-out-of-text"));
    extract_float(text.as_deref(), false)
}

/// Total number of ratings from "12,345 global ratings", `0` when missing.
#[must_use]
pub fn extract_total_review_count(root: Option<&Selection>) -> i64 {
    let text = access::find_text(root, &Query::tag("span").attr("data-hook", "total-review-count"));
    extract_int(text.as_deref(), false).unwrap_or(0)
}

/// Social-proof line such as "2K+ bought in past month".
#[must_use]
pub fn extract_social_proof(root: Option<&Selection>) -> Option<String> {
    access::find_text(root, &Query::feature(FEATURE_SOCIAL_PROOF))
}

/// Number in the social-proof line, honoring a `K` suffix; `0` when missing.
#[must_use]
pub fn social_proof_integer(social_proof: Option<&str>) -> i64 {
    extract_int(social_proof, true).unwrap_or(0)
}

/// Whether the "Amazon's Choice" badge is shown.
#[must_use]
pub fn extract_amazons_choice_badge(root: Option<&Selection>) -> bool {
    access::exists(root, &Query::tag("div").class("mvt-ac-badge-wrapper"))
}

/// Star-rating histogram percentages, five-star bucket first.
///
/// Reads `aria-valuenow` of the `div.a-meter` bars inside
/// `ul#histogramTable`. Buckets with no bar or an unreadable value are
/// `None`. All five are `None` when the table is missing or every bar reads
/// zero, which is how the page renders a histogram that has not loaded.
#[must_use]
pub fn extract_review_histogram(root: Option<&Selection>) -> [Option<u32>; 5] {
    let table = access::find_one(root, &Query::tag("ul").id("histogramTable"));
    let meters = access::find_all(table.as_ref(), &Query::tag("div").class("a-meter"));

    let mut buckets = [None; 5];
    for (bucket, meter) in buckets.iter_mut().zip(&meters) {
        *bucket = dom::get_attribute(meter, "aria-valuenow").and_then(|v| v.trim().parse().ok());
    }

    if buckets.iter().all(|b| *b == Some(0)) {
        return [None; 5];
    }
    buckets
}
