//! Selector Lists
//!
//! Main content and boilerplate regions are described as ordered lists of
//! CSS selectors. Each selector is compiled on its own so that one bad entry
//! (unsupported syntax in a user-supplied list, say) is logged and skipped
//! without discarding the rest of the list.

use dom_query::{Document, Matcher, Selection};
use tracing::warn;

use crate::dom;

pub mod content;
pub mod discard;

pub use content::isolate_main;
pub use discard::strip_boilerplate;

/// Compile `selector`, logging and returning `None` when it does not parse.
#[must_use]
pub fn compile_or_skip(selector: &str) -> Option<Matcher> {
    match dom::compile_selector(selector) {
        Ok(matcher) => Some(matcher),
        Err(reason) => {
            warn!(selector, %reason, "skipping selector that failed to parse");
            None
        }
    }
}

/// First element matched by the earliest selector in `selectors` that
/// matches anything.
///
/// Priority follows list order, not document order: a later selector only
/// wins when every earlier one matched nothing.
#[must_use]
pub fn first_by_priority<'a, S: AsRef<str>>(
    doc: &'a Document,
    selectors: &[S],
) -> Option<(usize, Selection<'a>)> {
    selectors.iter().enumerate().find_map(|(index, selector)| {
        let matcher = compile_or_skip(selector.as_ref())?;
        doc.select_matcher(&matcher)
            .nodes()
            .first()
            .map(|node| (index, Selection::from(*node)))
    })
}

/// Remove every element matched by any selector in `selectors`.
///
/// Returns the number of selectors that were applied; selectors that failed
/// to parse are logged and skipped.
pub fn remove_all<S: AsRef<str>>(doc: &Document, selectors: &[S]) -> usize {
    let mut applied = 0;
    for selector in selectors {
        let Some(matcher) = compile_or_skip(selector.as_ref()) else {
            continue;
        };
        doc.select_matcher(&matcher).remove();
        applied += 1;
    }
    applied
}
