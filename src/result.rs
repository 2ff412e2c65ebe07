//! Result types for extraction output.
//!
//! This module defines the flat product record handed to downstream
//! consumers. Field names serialize exactly as those consumers expect.

use serde::{Serialize, Serializer};

use crate::error::Result;

/// The six components of a displayed price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceData {
    /// Price as rendered, e.g. `"$19.99"`.
    pub display_price: String,

    /// Numeric amount, e.g. `19.99`.
    pub price_amount: f64,

    /// Currency symbol, e.g. `"$"`.
    pub currency_symbol: String,

    /// Whole units, e.g. `19`.
    pub integer_value: i64,

    /// Separator between whole and fractional units, e.g. `"."`.
    pub decimal_separator: String,

    /// Fractional units, e.g. `99`.
    pub fractional_value: i64,
}

/// Price record of a page: either all six components or nothing.
///
/// Serializes to `{}` when no price was found.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceRecord {
    #[serde(flatten)]
    data: Option<PriceData>,
}

impl PriceRecord {
    /// Record with no price.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no price was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }

    /// Price components, if found.
    #[must_use]
    pub fn data(&self) -> Option<&PriceData> {
        self.data.as_ref()
    }

    /// Parsed amount, if a price was found.
    #[must_use]
    pub fn amount(&self) -> Option<f64> {
        self.data.as_ref().map(|d| d.price_amount)
    }
}

impl From<PriceData> for PriceRecord {
    fn from(data: PriceData) -> Self {
        Self { data: Some(data) }
    }
}

/// Share of reviews per star rating, in percent.
///
/// Serialized with the star count as key (`"5"` down to `"1"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RatingsHistogram {
    #[serde(rename = "5")]
    pub five: Option<u32>,
    #[serde(rename = "4")]
    pub four: Option<u32>,
    #[serde(rename = "3")]
    pub three: Option<u32>,
    #[serde(rename = "2")]
    pub two: Option<u32>,
    #[serde(rename = "1")]
    pub one: Option<u32>,
}

impl From<[Option<u32>; 5]> for RatingsHistogram {
    /// Buckets ordered five-star first, as the page renders them.
    fn from([five, four, three, two, one]: [Option<u32>; 5]) -> Self {
        Self {
            five,
            four,
            three,
            two,
            one,
        }
    }
}

/// Flat record of everything extracted from one product page.
///
/// Built once per page. Every field is always present; fields whose page
/// structure was missing hold `None`, `false`, `0` or an empty list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    /// Assembly time, UTC, `%Y-%m-%dT%H:%M:%SZ`.
    pub timestamp: String,

    /// Whether the page was recognized as a scrapeable product page.
    pub success: bool,

    /// Page URL without query string or fragment.
    pub url: String,

    pub title: Option<String>,

    /// Product identifier (ASIN).
    pub asin: Option<String>,

    pub is_merchant_exclusive: bool,
    pub merchant_id: Option<String>,
    pub store_id: Option<String>,

    /// Brand byline with the "Visit the " prefix removed.
    pub byline_text: Option<String>,

    /// Brand store link without query string.
    pub byline_link: Option<String>,

    pub ships_from: Option<String>,
    pub sold_by: Option<String>,
    pub breadcrumbs: Vec<String>,
    pub thumbnails_count: usize,
    pub variations_count: i64,
    pub price_data: PriceRecord,
    pub amazons_choice_badge: bool,

    /// Social proof line ("2K+ bought in past month"); `false` when absent.
    #[serde(serialize_with = "serialize_text_or_false")]
    pub social_proof: Option<String>,

    pub social_proof_integer: i64,
    pub whats_in_the_box_exists: bool,
    pub documents_count: usize,
    pub documents_titles: Vec<String>,
    pub avg_review_stars: Option<f64>,
    pub total_review_count: i64,
    pub product_details_exists: bool,

    // === Enhanced content (A+) modules ===
    pub aplus_modules_count: usize,
    pub aplus_v2_exists: bool,
    pub aplus_feature_widgets_count: usize,
    pub aplus_brand_story_div_count: usize,
    pub aplus_brand_story_hero_exists: bool,
    pub aplus_carousel_slides_count: usize,
    pub aplus_bg_img_exists: bool,
    pub aplus_premium_exists: bool,
    pub premium_bg_wrapper_exists: bool,
    pub aplus_mantle_pages_count: usize,
    pub vse_player_exists: bool,

    /// Only present when `Options::include_review_histogram` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratings_histogram: Option<RatingsHistogram>,
}

impl ProductRecord {
    /// Serialize the record as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize the record as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn serialize_text_or_false<S: Serializer>(
    value: &Option<String>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match value {
        Some(text) => serializer.serialize_str(text),
        None => serializer.serialize_bool(false),
    }
}
