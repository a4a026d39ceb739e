//! Selector lists, thresholds and compiled patterns used by the heuristics.
//!
//! Thresholds are intentional boundaries; tests pin them exactly.

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Report Identity
// =============================================================================

/// Tool name written into report and export `_meta` objects.
pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");

/// Tool version written into the report `_meta` object.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Main Content Isolation
// =============================================================================

/// Main content selectors in priority order. The first selector with any
/// match wins.
pub const MAIN_CONTENT_SELECTORS: &[&str] = &[
    "main",
    r#"[role="main"]"#,
    ".main-content",
    ".MainContent",
    "#main",
    "#content",
    ".content",
    ".post-content",
    ".entry-content",
    ".article-body",
];

/// Boilerplate selectors stripped from a body clone when no main content
/// selector matched.
pub const BOILERPLATE_SELECTORS: &[&str] = &[
    "header",
    "footer",
    "nav",
    "aside",
    r#"[role="banner"]"#,
    r#"[role="contentinfo"]"#,
    r#"[role="navigation"]"#,
    ".header",
    ".Header",
    "#header",
    ".footer",
    ".Footer",
    "#footer",
    ".site-header",
    ".site-footer",
    ".navigation",
    ".nav",
    ".sidebar",
    ".widget",
    ".ad",
    ".advertisement",
    r#"[class*="ad-"]"#,
    r#"[id*="ad-"]"#,
    ".cookie-banner",
    ".consent-banner",
];

// =============================================================================
// Render Type
// =============================================================================

/// Ids of client-side framework mount points.
pub const MOUNT_ELEMENT_IDS: &[&str] = &["root", "app"];

/// Trimmed body text must exceed this many characters to count as visible.
pub const VISIBLE_TEXT_THRESHOLD: usize = 50;

// =============================================================================
// Locale / Text Metrics
// =============================================================================

/// Ideograph share above which a page is counted as CJK.
pub const CJK_RATIO_THRESHOLD: f64 = 0.3;

/// Language prefix that marks a page as Chinese.
pub const CJK_LANG_PREFIX: &str = "zh";

/// CJK Unified Ideographs block.
#[allow(clippy::expect_used)]
pub static CJK_IDEOGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{4e00}-\x{9fff}]").expect("CJK_IDEOGRAPH regex"));

// =============================================================================
// Structured Data
// =============================================================================

/// Selector for embedded JSON-LD blocks.
pub const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;

/// Type recorded when a block parses but declares no `@type`.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Type recorded when a block is not valid JSON.
pub const INVALID_JSON_TYPE: &str = "Invalid JSON";

/// Default bound on the `@type` walk depth.
pub const MAX_JSON_LD_DEPTH: usize = 64;

// =============================================================================
// SEO Meta Keys
// =============================================================================

/// General meta keys, looked up by `name` then `property`.
pub const GENERAL_META_KEYS: &[&str] = &["description", "keywords", "author", "robots", "viewport"];

/// Open Graph keys.
pub const OPEN_GRAPH_KEYS: &[&str] = &["og:title", "og:description", "og:image", "og:type", "og:url"];

/// Twitter card keys.
pub const TWITTER_CARD_KEYS: &[&str] = &[
    "twitter:card",
    "twitter:title",
    "twitter:description",
    "twitter:image",
    "twitter:site",
];
