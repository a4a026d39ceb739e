//! Configuration options for report assembly.
//!
//! The `Options` struct carries the selector lists and thresholds used by the
//! heuristics. Defaults come from the named constants in [`crate::patterns`].

use crate::patterns;

/// Configuration options for page analysis.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use page_signals::Options;
///
/// let options = Options {
///     mount_element_ids: vec!["__next".to_string()],
///     ..Options::default()
/// };
/// assert_eq!(options.visible_text_threshold, 50);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Selectors tried in priority order to find the main content region.
    ///
    /// Default: [`patterns::MAIN_CONTENT_SELECTORS`]
    pub main_content_selectors: Vec<String>,

    /// Selectors removed from a body clone when no main region matched.
    ///
    /// Default: [`patterns::BOILERPLATE_SELECTORS`]
    pub boilerplate_selectors: Vec<String>,

    /// Ids of client-side mount elements. Only the first id present in the
    /// document is consulted.
    ///
    /// Default: `["root", "app"]`
    pub mount_element_ids: Vec<String>,

    /// Body text must be strictly longer than this (in characters, after
    /// trimming) to count as visible content in markup.
    ///
    /// Default: `50`
    pub visible_text_threshold: usize,

    /// A page is treated as CJK when the ideograph share of non-whitespace
    /// characters is strictly greater than this.
    ///
    /// Default: `0.3`
    pub cjk_ratio_threshold: f64,

    /// Maximum nesting depth walked when collecting JSON-LD `@type` values.
    ///
    /// Default: `64`
    pub max_json_ld_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            main_content_selectors: to_owned_list(patterns::MAIN_CONTENT_SELECTORS),
            boilerplate_selectors: to_owned_list(patterns::BOILERPLATE_SELECTORS),
            mount_element_ids: to_owned_list(patterns::MOUNT_ELEMENT_IDS),
            visible_text_threshold: patterns::VISIBLE_TEXT_THRESHOLD,
            cjk_ratio_threshold: patterns::CJK_RATIO_THRESHOLD,
            max_json_ld_depth: patterns::MAX_JSON_LD_DEPTH,
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
