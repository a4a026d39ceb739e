//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by every extractor. All of
//! them read; the only mutation helpers operate on detached clones.

// Re-export core types for external use
pub use dom_query::{Document, Matcher, NodeRef, Selection};

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value from a single node
#[inline]
#[must_use]
pub fn node_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_ascii_lowercase())
}

// === Querying ===

/// Compile a CSS selector, returning the parser's complaint on failure.
///
/// `Selection::select` silently yields an empty selection for bad syntax;
/// callers that must tell "no match" apart from "invalid selector" go
/// through here.
pub fn compile_selector(selector: &str) -> Result<Matcher, String> {
    Matcher::new(selector).map_err(|err| format!("{err:?}"))
}

/// First element of the document matching `selector`, if any.
#[must_use]
pub fn first<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
}

/// The page body as `document.body` reports it: the first `body`, else the
/// first `frameset` child of the root element.
#[must_use]
pub fn document_body(doc: &Document) -> Option<Selection<'_>> {
    first(doc, "body").or_else(|| first(doc, "html > frameset"))
}

/// First element whose `id` equals `id`.
#[must_use]
pub fn element_by_id<'a>(doc: &'a Document, id: &str) -> Option<Selection<'a>> {
    doc.select("[id]")
        .nodes()
        .iter()
        .find(|node| node.attr("id").is_some_and(|v| &*v == id))
        .map(|node| Selection::from(*node))
}

/// Number of element children (text and comment nodes excluded).
#[must_use]
pub fn element_child_count(sel: &Selection) -> usize {
    sel.children().length()
}

/// Previous sibling that is an element, skipping text nodes.
#[must_use]
pub fn previous_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.prev_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.prev_sibling();
    }
    None
}

// === Cloning ===

/// Deep-clone an element into a new, detached document.
///
/// The source tree is serialized and reparsed, so edits to the returned
/// document never reach the original page.
#[must_use]
pub fn clone_element(sel: &Selection) -> Document {
    Document::from(sel.html())
}

// === Text ===

/// Collapse ASCII whitespace runs to single spaces and trim, as browsers do
/// for `document.title`.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}
