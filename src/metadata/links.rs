//! Link-element metadata: canonical URL and hreflang alternates.
//!
//! `rel` values are matched ASCII case-insensitively as whole tokens, and
//! `href` values are resolved against the snapshot's base URL.

use dom_query::NodeRef;

use crate::dom;
use crate::snapshot::PageSnapshot;

fn has_rel(node: &NodeRef, rel: &str) -> bool {
    node.attr("rel").is_some_and(|value| {
        value
            .split_ascii_whitespace()
            .any(|token| token.eq_ignore_ascii_case(rel))
    })
}

/// Resolved `href` of the first `link rel="canonical"`.
#[must_use]
pub fn canonical(snapshot: &PageSnapshot) -> Option<String> {
    snapshot
        .document()
        .select("link[rel]")
        .nodes()
        .iter()
        .find(|node| has_rel(node, "canonical"))
        .and_then(|node| dom::node_attribute(node, "href"))
        .map(|href| snapshot.resolve(&href))
}

/// `"<hreflang>:<resolved href>"` for every `link rel="alternate"` that
/// carries an `hreflang`, in document order. Duplicates are kept.
#[must_use]
pub fn hreflang(snapshot: &PageSnapshot) -> Vec<String> {
    snapshot
        .document()
        .select("link[hreflang]")
        .nodes()
        .iter()
        .filter(|node| has_rel(node, "alternate"))
        .map(|node| {
            let lang = dom::node_attribute(node, "hreflang").unwrap_or_default();
            let href = dom::node_attribute(node, "href")
                .map(|href| snapshot.resolve(&href))
                .unwrap_or_default();
            format!("{lang}:{href}")
        })
        .collect()
}
