//! Boilerplate Stripping
//!
//! Used when no main-content container is found: the body is cloned, site
//! chrome (headers, footers, navigation, sidebars, ads, cookie banners) is
//! removed from the clone, and whatever remains is treated as main content.
//! Frameset pages use their `frameset` element as the body; a document with
//! neither yields empty text.

use dom_query::{Document, Selection};
use tracing::debug;

use crate::dom;
use crate::selector;
use crate::text;

/// Clone `body`, strip elements matched by `selectors`, and return the
/// rendered text of what is left.
///
/// The clone is detached from the source document and dropped on return.
#[must_use]
pub fn strip_boilerplate<S: AsRef<str>>(body: &Selection, selectors: &[S]) -> String {
    let clone = dom::clone_element(body);
    let applied = selector::remove_all(&clone, selectors);
    debug!(applied, total = selectors.len(), "boilerplate selectors applied to body clone");
    dom::document_body(&clone)
        .map(|rest| text::inner_text(&rest))
        .unwrap_or_default()
}

/// Rendered text of the document body with boilerplate stripped.
///
/// Empty when the document has neither a `body` nor a `frameset`.
#[must_use]
pub fn stripped_body_text<S: AsRef<str>>(doc: &Document, selectors: &[S]) -> String {
    dom::document_body(doc)
        .map(|body| strip_boilerplate(&body, selectors))
        .unwrap_or_default()
}
