//! Gallery, document and enhanced-content (A+) module extractors.
//!
//! Most of these only report whether a page module exists or how many
//! items it holds. Extractors named `aplus_*` that take `aplus` expect the
//! `div#aplus` section from [`aplus_section`] and count nothing when it is
//! missing.

use dom_query::Selection;

use crate::access::{self, Query};
use crate::dom;

/// Number of gallery thumbnails.
#[must_use]
pub fn extract_thumbnails_count(root: Option<&Selection>) -> usize {
    let gallery = access::find_one(root, &Query::any().attr("aria-label", "Image thumbnails"));
    access::count(gallery.as_ref(), &Query::tag("li").class("imageThumbnail"))
}

/// Titles of the downloadable product documents (manuals, spec sheets).
///
/// One entry per link, trimmed, in page order.
#[must_use]
pub fn extract_documents_titles(root: Option<&Selection>) -> Vec<String> {
    let section = access::find_one(root, &Query::tag("div").id("productDocuments_feature_div"));
    access::find_all(section.as_ref(), &Query::tag("a"))
        .iter()
        .map(|link| dom::text_content(link).trim().to_string())
        .collect()
}

#[must_use]
pub fn whats_in_the_box_exists(root: Option<&Selection>) -> bool {
    access::exists(root, &Query::tag("div").id("whatsInTheBoxDeck"))
}

#[must_use]
pub fn product_details_exists(root: Option<&Selection>) -> bool {
    access::exists(root, &Query::tag("div").id("productDescription_feature_div"))
}

/// The enhanced-content section, `div#aplus`.
#[must_use]
pub fn aplus_section<'a>(root: Option<&Selection<'a>>) -> Option<Selection<'a>> {
    access::find_one(root, &Query::tag("div").id("aplus"))
}

/// A+ modules anywhere on the page.
#[must_use]
pub fn aplus_modules_count(root: Option<&Selection>) -> usize {
    access::count(root, &Query::tag("div").class("aplus-module"))
}

#[must_use]
pub fn aplus_v2_exists(root: Option<&Selection>) -> bool {
    access::exists(root, &Query::tag("div").class("aplus-v2"))
}

#[must_use]
pub fn aplus_premium_exists(root: Option<&Selection>) -> bool {
    access::exists(root, &Query::tag("div").class("premium-aplus"))
}

/// Widgets (`div.celwidget`) inside the A+ section.
#[must_use]
pub fn aplus_feature_widgets_count(aplus: Option<&Selection>) -> usize {
    access::count(aplus, &Query::tag("div").class("celwidget"))
}

#[must_use]
pub fn aplus_brand_story_hero_exists(root: Option<&Selection>) -> bool {
    access::exists(
        root,
        &Query::tag("div").class("apm-brand-story-carousel-hero-container"),
    )
}

/// Every `div` nested in the brand story section.
#[must_use]
pub fn aplus_brand_story_div_count(root: Option<&Selection>) -> usize {
    let story = access::find_one(root, &Query::tag("div").id("aplusBrandStory_feature_div"));
    access::count(story.as_ref(), &Query::tag("div"))
}

/// Carousel cards inside the A+ section.
#[must_use]
pub fn aplus_carousel_slides_count(aplus: Option<&Selection>) -> usize {
    access::count(aplus, &Query::tag("li").class("a-carousel-card"))
}

/// Brand story background image inside the A+ section.
#[must_use]
pub fn aplus_bg_img_exists(aplus: Option<&Selection>) -> bool {
    access::exists(
        aplus,
        &Query::tag("div").class("apm-brand-story-background-image"),
    )
}

#[must_use]
pub fn premium_bg_wrapper_exists(root: Option<&Selection>) -> bool {
    access::exists(root, &Query::tag("div").class("premium-background-wrapper"))
}

/// Pagination dots of the A+ "mantle" pager, one per page.
#[must_use]
pub fn aplus_mantle_pages_count(root: Option<&Selection>) -> usize {
    access::count(root, &Query::tag("li").class("aplus-pagination-dot"))
}

/// Whether a product video player is embedded.
#[must_use]
pub fn vse_player_exists(root: Option<&Selection>) -> bool {
    access::exists(root, &Query::tag("div").class("vse-player"))
}
