//! Field extractors.
//!
//! Each extractor derives one value of the product record from the page,
//! going through the [`access`](crate::access) layer so that missing page
//! structure resolves to the extractor's default instead of failing.
//! Extractors are independent of each other and may run in any order.
//!
//! # Module Structure
//!
//! - `product`: identity fields (title, ASIN, merchant, byline, breadcrumbs)
//! - `offer`: fulfilment, variations and the embedded price blob
//! - `reviews`: rating, review count, social proof, star histogram
//! - `content`: gallery, documents and enhanced-content (A+) modules
//!
//! # Usage
//!
//! ```rust
//! use pdp_extract::{dom, extractor};
//!
//! let doc = dom::parse(r#"<h1 id="title"> Acme Mouse </h1>"#);
//! let root = dom::root(&doc);
//!
//! assert_eq!(extractor::product::extract_title(Some(&root)).as_deref(), Some("Acme Mouse"));
//! assert_eq!(extractor::product::extract_asin(Some(&root)), None);
//! ```

pub mod content;
pub mod offer;
pub mod product;
pub mod reviews;
