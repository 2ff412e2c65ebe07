//! Safe-access layer
//!
//! Every page lookup goes through these helpers. They take the parent as
//! `Option<&Selection>` so lookups can be chained on the result of an
//! earlier lookup without checking for absence at each step: a missing
//! parent, an empty parent selection, or a query that matches nothing all
//! resolve to `None` (or an empty `Vec`), never to a panic.
//!
//! Queries only look at descendants of the parent, never the parent itself.

use dom_query::Selection;

use crate::dom;
use crate::text::normalize_whitespace;

/// A tag plus id/class/attribute constraints used to locate page nodes.
///
/// Compiles to a CSS selector. All constraints must hold for a node to match.
///
/// # Example
///
/// ```rust
/// use pdp_extract::access::{self, Query};
/// use pdp_extract::dom;
///
/// let doc = dom::parse(r#"<input id="ASIN" value="B000TEST01">"#);
/// let root = dom::root(&doc);
///
/// let asin = access::find_attr(Some(&root), &Query::tag("input").id("ASIN"), "value");
/// assert_eq!(asin.as_deref(), Some("B000TEST01"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

impl Query {
    /// Match elements with the given tag name.
    #[must_use]
    pub fn tag(name: &str) -> Self {
        Self {
            tag: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Match elements of any tag.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Require the `id` attribute to equal `id`.
    #[must_use]
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Require `class` to be one of the element's class tokens.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Require the attribute to be present, whatever its value.
    #[must_use]
    pub fn has_attr(mut self, name: &str) -> Self {
        self.attrs.push((name.to_string(), None));
        self
    }

    /// Require the attribute to equal `value` exactly.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), Some(value.to_string())));
        self
    }

    /// Shorthand for `attr("data-feature-name", name)`, the page's widget hook.
    #[must_use]
    pub fn feature(name: &str) -> Self {
        Self::any().attr("data-feature-name", name)
    }

    /// CSS selector equivalent of this query.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = self.tag.clone().unwrap_or_default();

        if let Some(ref id) = self.id {
            css.push_str(&format!("[id=\"{}\"]", escape(id)));
        }
        for class in &self.classes {
            css.push_str(&format!("[class~=\"{}\"]", escape(class)));
        }
        for (name, value) in &self.attrs {
            let selector = match value {
                Some(v) => format!("[{name}=\"{}\"]", escape(v)),
                None => format!("[{name}]"),
            };
            css.push_str(&selector);
        }

        if css.is_empty() {
            css.push('*');
        }
        css
    }
}

/// Escape a value for use inside a double-quoted CSS attribute selector.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// All descendants of `parent` matching `query`.
fn select<'a>(parent: Option<&Selection<'a>>, query: &Query) -> Option<Selection<'a>> {
    let parent = parent.filter(|p| p.exists())?;
    parent.try_select(&query.to_css()).filter(Selection::exists)
}

/// First descendant of `parent` matching `query`, in document order.
#[must_use]
pub fn find_one<'a>(parent: Option<&Selection<'a>>, query: &Query) -> Option<Selection<'a>> {
    select(parent, query).as_ref().and_then(dom::first)
}

/// All descendants of `parent` matching `query`, in document order.
///
/// Empty when `parent` is absent or nothing matches.
#[must_use]
pub fn find_all<'a>(parent: Option<&Selection<'a>>, query: &Query) -> Vec<Selection<'a>> {
    select(parent, query).as_ref().map(dom::each).unwrap_or_default()
}

/// Whitespace-normalized text of the first match.
#[must_use]
pub fn find_text(parent: Option<&Selection>, query: &Query) -> Option<String> {
    find_one(parent, query).map(|el| normalize_whitespace(&dom::text_content(&el)))
}

/// Raw, unnormalized text of the first match.
#[must_use]
pub fn find_raw_text(parent: Option<&Selection>, query: &Query) -> Option<String> {
    find_one(parent, query).map(|el| dom::text_content(&el).to_string())
}

/// Attribute value of the first match.
///
/// `None` when nothing matches or the first match lacks the attribute.
#[must_use]
pub fn find_attr(parent: Option<&Selection>, query: &Query, name: &str) -> Option<String> {
    find_one(parent, query).and_then(|el| dom::get_attribute(&el, name))
}

/// Whether any descendant of `parent` matches `query`.
#[must_use]
pub fn exists(parent: Option<&Selection>, query: &Query) -> bool {
    find_one(parent, query).is_some()
}

/// Number of descendants of `parent` matching `query`.
#[must_use]
pub fn count(parent: Option<&Selection>, query: &Query) -> usize {
    select(parent, query).map_or(0, |sel| sel.length())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <div id="dp-container">
            <h1 id="title">
                Acme   Wireless
                Mouse
            </h1>
            <input type="hidden" id="storeID" value="">
            <div class="box aplus-module">one</div>
            <div class="aplus-module wide">two</div>
            <div data-feature-name="bylineInfo"><a href="/stores/Acme">Visit the Acme Store</a></div>
        </div>
    "#;

    #[test]
    fn test_query_to_css() {
        assert_eq!(Query::tag("h1").id("title").to_css(), r#"h1[id="title"]"#);
        assert_eq!(Query::tag("div").class("a-meter").to_css(), r#"div[class~="a-meter"]"#);
        assert_eq!(
            Query::feature("bylineInfo").to_css(),
            r#"[data-feature-name="bylineInfo"]"#
        );
        assert_eq!(
            Query::tag("div").has_attr("data-totalvariationcount").to_css(),
            "div[data-totalvariationcount]"
        );
        assert_eq!(Query::any().to_css(), "*");
    }

    #[test]
    fn test_query_to_css_all_parts_in_order() {
        let query = Query::tag("span")
            .id("acBadge")
            .class("a-badge")
            .class("ac-badge")
            .attr("data-a-badge-type", "choice")
            .has_attr("aria-hidden");
        assert_eq!(
            query.to_css(),
            r#"span[id="acBadge"][class~="a-badge"][class~="ac-badge"][data-a-badge-type="choice"][aria-hidden]"#
        );
    }

    #[test]
    fn test_query_escapes_quotes() {
        assert_eq!(
            Query::any().attr("aria-label", r#"say "hi""#).to_css(),
            r#"[aria-label="say \"hi\""]"#
        );
    }

    #[test]
    fn test_find_text_normalizes_whitespace() {
        let doc = dom::parse(PAGE);
        let root = dom::root(&doc);

        let title = find_text(Some(&root), &Query::tag("h1").id("title"));
        assert_eq!(title.as_deref(), Some("Acme Wireless Mouse"));
    }

    #[test]
    fn test_find_attr_present_but_empty() {
        let doc = dom::parse(PAGE);
        let root = dom::root(&doc);

        let store = find_attr(Some(&root), &Query::tag("input").id("storeID"), "value");
        assert_eq!(store.as_deref(), Some(""));
    }

    #[test]
    fn test_find_attr_missing_attribute() {
        let doc = dom::parse(PAGE);
        let root = dom::root(&doc);

        assert_eq!(find_attr(Some(&root), &Query::tag("h1"), "value"), None);
    }

    #[test]
    fn test_class_matches_single_token() {
        let doc = dom::parse(PAGE);
        let root = dom::root(&doc);

        assert_eq!(count(Some(&root), &Query::tag("div").class("aplus-module")), 2);
        assert_eq!(count(Some(&root), &Query::tag("div").class("aplus")), 0);
    }

    #[test]
    fn test_none_parent_short_circuits() {
        let q = Query::tag("div");
        assert!(find_one(None, &q).is_none());
        assert!(find_all(None, &q).is_empty());
        assert!(find_text(None, &q).is_none());
        assert!(find_attr(None, &q, "id").is_none());
        assert!(!exists(None, &q));
        assert_eq!(count(None, &q), 0);
    }

    #[test]
    fn test_chained_lookup_on_missing_parent() {
        let doc = dom::parse(PAGE);
        let root = dom::root(&doc);

        let aplus = find_one(Some(&root), &Query::tag("div").id("aplus"));
        assert!(aplus.is_none());
        assert_eq!(count(aplus.as_ref(), &Query::tag("div").class("celwidget")), 0);
    }

    #[test]
    fn test_chained_lookup_on_present_parent() {
        let doc = dom::parse(PAGE);
        let root = dom::root(&doc);

        let byline = find_one(Some(&root), &Query::feature("bylineInfo"));
        let href = find_attr(byline.as_ref(), &Query::tag("a"), "href");
        assert_eq!(href.as_deref(), Some("/stores/Acme"));
    }

    #[test]
    fn test_find_all_document_order() {
        let doc = dom::parse(PAGE);
        let root = dom::root(&doc);

        let texts: Vec<String> = find_all(Some(&root), &Query::tag("div").class("aplus-module"))
            .iter()
            .map(|el| dom::text_content(el).to_string())
            .collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn test_empty_selection_parent_is_absent() {
        let doc = dom::parse(PAGE);
        let empty = doc.select("table");

        assert!(find_one(Some(&empty), &Query::any()).is_none());
    }

    #[test]
    fn test_query_does_not_match_parent_itself() {
        let doc = dom::parse(PAGE);
        let container = doc.select("#dp-container");

        assert!(!exists(Some(&container), &Query::tag("div").id("dp-container")));
    }
}
