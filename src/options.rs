//! Configuration options for product extraction.
//!
//! The `Options` struct tunes the few knobs the record assembler exposes.
//! The defaults reproduce the record shape downstream consumers expect.

/// Configuration options for product extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use pdp_extract::Options;
///
/// let options = Options {
///     include_review_histogram: true,
///     ..Options::default()
/// };
/// assert!((options.min_price_amount - 0.01).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Add the star-rating histogram to the record as `ratings_histogram`.
    ///
    /// The histogram meters are often rendered empty, so the field is
    /// left out of the default record.
    ///
    /// Default: `false`
    pub include_review_histogram: bool,

    /// Smallest price amount a successful extraction may report.
    ///
    /// Records whose parsed price is below this (or missing) are marked
    /// `success = false`.
    ///
    /// Default: `0.01`
    pub min_price_amount: f64,

    /// Character separating entries in the breadcrumb trail.
    ///
    /// Default: `'›'`
    pub breadcrumb_separator: char,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            include_review_histogram: false,
            min_price_amount: 0.01,
            breadcrumb_separator: '›',
        }
    }
}
