//! Record assembly.
//!
//! Runs every field extractor against one parsed page, evaluates the success
//! rule and builds the flat [`ProductRecord`].

use chrono::Utc;
use dom_query::Document;

use crate::dom;
use crate::extractor::{content, offer, product, reviews};
use crate::result::{ProductRecord, RatingsHistogram};
use crate::url_utils::strip_url_args;
use crate::validation::Evidence;
use crate::Options;

/// Timestamp format of [`ProductRecord::timestamp`].
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Build the product record for one page.
pub(crate) fn extract_record(url: &str, doc: &Document, options: &Options) -> ProductRecord {
    let root = dom::root(doc);
    let root = Some(&root);

    // Identity
    let title = product::extract_title(root);
    let asin = product::extract_asin(root);
    let (byline_text, byline_link) = product::extract_byline(root);
    let breadcrumbs = product::extract_breadcrumbs(root, options.breadcrumb_separator);

    // Offer
    let (ships_from, sold_by) = offer::extract_ships_and_seller(root);
    let price_data = offer::extract_price(root);

    // Reviews
    let social_proof = reviews::extract_social_proof(root);
    let social_proof_integer = reviews::social_proof_integer(social_proof.as_deref());
    let ratings_histogram = options
        .include_review_histogram
        .then(|| RatingsHistogram::from(reviews::extract_review_histogram(root)));

    // Documents and A+ content
    let documents_titles = content::extract_documents_titles(root);
    let aplus = content::aplus_section(root);
    let aplus = aplus.as_ref();

    let evidence = Evidence {
        has_primary_container: product::primary_container_exists(root),
        title: title.as_deref(),
        asin: asin.as_deref(),
        price_amount: price_data.amount(),
        min_price_amount: options.min_price_amount,
    };
    let success = evidence.is_success();
    if !success {
        for check in evidence.failed_checks() {
            tracing::debug!(url, %check, "product page check failed");
        }
    }

    let record = ProductRecord {
        timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
        success,
        url: strip_url_args(url),
        title,
        asin,
        is_merchant_exclusive: product::extract_merchant_exclusive(root),
        merchant_id: product::extract_merchant_id(root),
        store_id: product::extract_store_id(root),
        byline_text,
        byline_link,
        ships_from,
        sold_by,
        breadcrumbs,
        thumbnails_count: content::extract_thumbnails_count(root),
        variations_count: offer::extract_variations_count(root),
        price_data,
        amazons_choice_badge: reviews::extract_amazons_choice_badge(root),
        social_proof,
        social_proof_integer,
        whats_in_the_box_exists: content::whats_in_the_box_exists(root),
        documents_count: documents_titles.len(),
        documents_titles,
        avg_review_stars: reviews::extract_avg_review_stars(root),
        total_review_count: reviews::extract_total_review_count(root),
        product_details_exists: content::product_details_exists(root),
        aplus_modules_count: content::aplus_modules_count(root),
        aplus_v2_exists: content::aplus_v2_exists(root),
        aplus_feature_widgets_count: content::aplus_feature_widgets_count(aplus),
        aplus_brand_story_div_count: content::aplus_brand_story_div_count(root),
        aplus_brand_story_hero_exists: content::aplus_brand_story_hero_exists(root),
        aplus_carousel_slides_count: content::aplus_carousel_slides_count(aplus),
        aplus_bg_img_exists: content::aplus_bg_img_exists(aplus),
        aplus_premium_exists: content::aplus_premium_exists(root),
        premium_bg_wrapper_exists: content::premium_bg_wrapper_exists(root),
        aplus_mantle_pages_count: content::aplus_mantle_pages_count(root),
        vse_player_exists: content::vse_player_exists(root),
        ratings_histogram,
    };

    tracing::trace!(
        url = %record.url,
        success = record.success,
        asin = ?record.asin,
        "assembled product record"
    );

    record
}
