//! CSR/SSR classification.
//!
//! A heuristic, not ground truth. Two signals are combined:
//!
//! - **Visible content in markup**: the document has a non-empty title and
//!   the trimmed body text is longer than the visible-text threshold.
//! - **Likely client-rendered**: a framework mount element (`#root`, then
//!   `#app`) exists and has no element children.
//!
//! A page is `CSR` if it is likely client-rendered or has no visible content
//! in markup, otherwise `SSR`.
//!
//! Known limitations: a server-rendered page that keeps an empty mount node
//! next to its real content is reported as CSR, and hydration frameworks
//! that ship full markup are reported as SSR even though script takes over
//! after load. Both are accepted outcomes of the heuristic.

use tracing::debug;

use crate::dom;
use crate::metadata;
use crate::result::RenderType;
use crate::snapshot::PageSnapshot;
use crate::text;
use crate::Options;

/// Rendered text of the body (the `frameset` on frameset pages), empty if
/// the document has neither.
#[must_use]
pub fn body_text(snapshot: &PageSnapshot) -> String {
    dom::document_body(snapshot.document())
        .map(|body| text::inner_text(&body))
        .unwrap_or_default()
}

/// Title is non-empty and trimmed body text is longer than `threshold`
/// characters.
#[must_use]
pub fn has_visible_content_in_markup(title: &str, body_text: &str, threshold: usize) -> bool {
    !title.trim().is_empty() && body_text.trim().chars().count() > threshold
}

/// The first mount element present (in `mount_ids` order) has no element
/// children. Later ids are not consulted once one is found.
#[must_use]
pub fn is_likely_client_rendered<S: AsRef<str>>(snapshot: &PageSnapshot, mount_ids: &[S]) -> bool {
    mount_ids
        .iter()
        .find_map(|id| dom::element_by_id(snapshot.document(), id.as_ref()))
        .is_some_and(|mount| dom::element_child_count(&mount) == 0)
}

/// Classify the page from precomputed body text.
#[must_use]
pub fn classify_with_text(snapshot: &PageSnapshot, body_text: &str, options: &Options) -> RenderType {
    let title = metadata::page_title(snapshot).unwrap_or_default();
    let visible = has_visible_content_in_markup(&title, body_text, options.visible_text_threshold);
    let client_rendered = is_likely_client_rendered(snapshot, options.mount_element_ids.as_slice());

    let render_type = if client_rendered || !visible {
        RenderType::Csr
    } else {
        RenderType::Ssr
    };
    debug!(visible, client_rendered, %render_type, "render type classified");
    render_type
}

/// Classify the page as client- or server-rendered.
#[must_use]
pub fn classify(snapshot: &PageSnapshot, options: &Options) -> RenderType {
    classify_with_text(snapshot, &body_text(snapshot), options)
}
