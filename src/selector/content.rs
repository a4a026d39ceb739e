//! Main Content Isolation
//!
//! The main content region is the first element matched by the prioritized
//! container selectors (`main`, `[role="main"]`, common content classes and
//! ids). Pages without such a container fall back to the whole body minus
//! boilerplate, see [`crate::selector::discard`]. Isolation never fails: a
//! page with nothing to render yields empty text.

use tracing::debug;

use crate::selector::{self, discard};
use crate::snapshot::PageSnapshot;
use crate::text;
use crate::Options;

/// Rendered text of the page's main content region.
#[must_use]
pub fn isolate_main(snapshot: &PageSnapshot, options: &Options) -> String {
    let doc = snapshot.document();

    if let Some((index, container)) = selector::first_by_priority(doc, options.main_content_selectors.as_slice()) {
        debug!(selector = %options.main_content_selectors[index], "main content container matched");
        return text::inner_text(&container);
    }

    debug!("no main content container, stripping boilerplate from body");
    discard::stripped_body_text(doc, options.boilerplate_selectors.as_slice())
}
