//! Page metadata: title, canonical URL, charset, language, SEO meta groups
//! and hreflang alternates.
//!
//! Every field is optional. A missing tag is reported as absent, never as an
//! error.

pub mod json_ld;
pub mod links;
pub mod meta_tags;

use crate::dom;
use crate::result::PageMetadata;
use crate::snapshot::PageSnapshot;

pub use json_ld::extract_json_ld;
pub use links::{canonical, hreflang};
pub use meta_tags::{charset, content_language, seo_metas};

/// Collapsed text of the first `<title>`, `None` when missing or blank.
#[must_use]
pub fn page_title(snapshot: &PageSnapshot) -> Option<String> {
    dom::first(snapshot.document(), "title")
        .map(|title| dom::collapse_whitespace(&title.text()))
        .filter(|title| !title.is_empty())
}

/// Extract all page metadata from a snapshot.
#[must_use]
pub fn extract_metadata(snapshot: &PageSnapshot) -> PageMetadata {
    let doc = snapshot.document();

    PageMetadata {
        page_title: page_title(snapshot),
        canonical: links::canonical(snapshot),
        charset: meta_tags::charset(doc),
        content_language: meta_tags::content_language(doc),
        seo_metas: meta_tags::seo_metas(doc),
        hreflang: links::hreflang(snapshot),
    }
}
