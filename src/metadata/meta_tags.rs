//! HTML Meta Tag Extraction
//!
//! Reads `<meta>` declarations: the three SEO tag families, `charset` and
//! http-equiv headers such as `Content-Language`.

use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns::{GENERAL_META_KEYS, OPEN_GRAPH_KEYS, TWITTER_CARD_KEYS};
use crate::result::{MetaGroup, SeoMetas};

/// Look up each key as a `meta[name]`, falling back to `meta[property]`.
///
/// Every key appears in the result, in the order given. The value is the
/// `content` attribute of the first matching tag; `None` if no tag matches
/// or it carries no `content`.
#[must_use]
pub fn lookup_group(doc: &Document, keys: &[&str]) -> MetaGroup {
    let metas = doc.select("meta");
    let nodes = metas.nodes();

    let find_by = |attr: &str, key: &str| {
        nodes
            .iter()
            .find(|node| node.attr(attr).is_some_and(|v| &*v == key))
            .map(|node| Selection::from(*node))
    };

    let entries = keys
        .iter()
        .map(|key| {
            let value = find_by("name", *key)
                .or_else(|| find_by("property", *key))
                .and_then(|meta| dom::get_attribute(&meta, "content"));
            ((*key).to_string(), value)
        })
        .collect();

    MetaGroup::from_entries(entries)
}

/// General, Open Graph and Twitter card tags.
#[must_use]
pub fn seo_metas(doc: &Document) -> SeoMetas {
    SeoMetas {
        general: lookup_group(doc, GENERAL_META_KEYS),
        open_graph: lookup_group(doc, OPEN_GRAPH_KEYS),
        twitter_card: lookup_group(doc, TWITTER_CARD_KEYS),
    }
}

/// Value of the first `meta[charset]`.
#[must_use]
pub fn charset(doc: &Document) -> Option<String> {
    dom::first(doc, "meta[charset]").and_then(|meta| dom::get_attribute(&meta, "charset"))
}

/// `content` of the first `meta` whose `http-equiv` matches `header`
/// (ASCII case-insensitive).
#[must_use]
pub fn http_equiv_content(doc: &Document, header: &str) -> Option<String> {
    doc.select("meta[http-equiv]")
        .nodes()
        .iter()
        .find(|node| {
            node.attr("http-equiv")
                .is_some_and(|v| v.trim().eq_ignore_ascii_case(header))
        })
        .and_then(|node| dom::node_attribute(node, "content"))
}

/// Declared `Content-Language`, else the root `lang`, else `None`.
///
/// A declaration with a blank `content` counts as absent.
#[must_use]
pub fn content_language(doc: &Document) -> Option<String> {
    http_equiv_content(doc, "content-language")
        .filter(|lang| !lang.trim().is_empty())
        .or_else(|| {
            dom::first(doc, "html")
                .and_then(|html| dom::get_attribute(&html, "lang"))
                .filter(|lang| !lang.is_empty())
        })
}
