//! DOM adapter
//!
//! Thin read-only layer over the `dom_query` crate. The extractors never
//! mutate the page, so only parsing, root lookup and text/attribute reads
//! are exposed here.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Root element of the document.
///
/// The HTML parser always synthesizes an `<html>` element, so every page
/// element is a descendant of the returned selection.
#[inline]
#[must_use]
pub fn root(doc: &Document) -> Selection<'_> {
    doc.select("html")
}

/// First node of a selection as its own selection, if any.
#[must_use]
pub fn first<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().map(|node| Selection::from(*node))
}

/// Split a selection into one selection per node, in document order.
#[must_use]
pub fn each<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

/// All text content of the selection and its descendants.
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Attribute value of the first node in the selection.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Lowercase tag name of the first node in the selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_contains_body_content() {
        let doc = parse(r#"<div id="dp-container">content</div>"#);
        let html = root(&doc);

        assert!(html.exists());
        assert_eq!(tag_name(&html), Some("html".to_string()));
        assert!(html.select("#dp-container").exists());
    }

    #[test]
    fn test_first_and_each() {
        let doc = parse(r#"<ul><li>1</li><li>2</li><li>3</li></ul>"#);
        let items = doc.select("li");

        let head = first(&items).unwrap();
        assert_eq!(text_content(&head), "1".into());

        let all: Vec<String> = each(&items)
            .iter()
            .map(|li| text_content(li).to_string())
            .collect();
        assert_eq!(all, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_first_of_empty_selection() {
        let doc = parse("<div>content</div>");
        assert!(first(&doc.select("span")).is_none());
        assert!(each(&doc.select("span")).is_empty());
    }

    #[test]
    fn test_attribute_reads() {
        let doc = parse(r#"<input id="ASIN" value="B000TEST01">"#);
        let input = doc.select("input");

        assert_eq!(get_attribute(&input, "value"), Some("B000TEST01".to_string()));
        assert_eq!(get_attribute(&input, "name"), None);
        assert_eq!(tag_name(&input), Some("input".to_string()));
    }

    #[test]
    fn test_text_content_includes_descendants() {
        let doc = parse(r#"<div>text <span>nested</span> more</div>"#);
        assert_eq!(text_content(&doc.select("div")), "text nested more".into());
    }
}
