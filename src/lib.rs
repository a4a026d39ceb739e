//! # page-signals
//!
//! On-demand SEO and rendering signals for a single web page.
//!
//! Given one parsed page, the library reports how the page was most likely
//! rendered (client- or server-side), the SEO metadata it exposes, how much
//! text it carries overall and in its main content region, and every JSON-LD
//! block it embeds together with the schema types declared inside.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_signals::{analyze, RenderType, StatusCode};
//!
//! let html = r#"<html lang="en"><head><title>Hello</title></head>
//! <body><main><p>Hello world, this is a test page with more than fifty characters total here.</p></main></body></html>"#;
//!
//! let report = analyze(html, "https://example.com/", StatusCode::Code(200))?;
//! assert_eq!(report.render_type, RenderType::Ssr);
//! assert_eq!(report.page_title.as_deref(), Some("Hello"));
//! println!("{}", report.to_json(true)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## What is reported
//!
//! - **Render type**: `CSR` or `SSR`, from a title/visible-text check and an
//!   empty framework mount element check
//! - **Metadata**: title, canonical, charset, content language, general,
//!   Open Graph and Twitter meta tags, hreflang alternates
//! - **Text metrics**: characters and words for the full page and the main
//!   content region, with ideograph-based word counts for Chinese pages
//! - **Structured data**: every JSON-LD block, raw, with its `@type` values
//!
//! The document is only read. Analysis is synchronous and holds no state
//! between calls.

mod error;
mod extract;
mod options;
mod result;

/// Thin helpers over `dom_query` used by the extractors.
pub mod dom;

/// Character encoding detection for raw HTML bytes.
pub mod encoding;

/// CSV flattening and JSON-LD export documents.
pub mod export;

/// Metadata extraction (meta tags, link elements, JSON-LD).
pub mod metadata;

/// Heuristic constants and default selector lists.
pub mod patterns;

/// CSR/SSR classification.
pub mod render_type;

/// Main content isolation and boilerplate stripping.
pub mod selector;

/// Parsed page plus its document URL.
pub mod snapshot;

/// Rendered text and locale-aware counting.
pub mod text;

/// URL resolution helpers.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, ExtractError, Result, Stage};
pub use options::Options;
pub use result::{
    JsonLdEntry, MetaGroup, PageMetadata, PageReport, RenderType, ReportMeta, SeoMetas,
    StatusCode, TextMetrics,
};
pub use snapshot::PageSnapshot;

/// Builds a report for one page snapshot.
///
/// `url` and `status_code` are embedded verbatim. `snapshot` is `None` when
/// there is no page to inspect, which yields [`Error::NoTargetContext`].
///
/// # Errors
///
/// Returns [`Error::NoTargetContext`] without a snapshot, and
/// [`Error::ExtractionFailed`] when an extraction step panics. No partial
/// report is ever returned.
///
/// # Example
///
/// ```rust
/// use page_signals::{assemble, Options, PageSnapshot, StatusCode};
///
/// let snapshot = PageSnapshot::parse("<title>T</title><p>text</p>", "https://example.com/");
/// let report = assemble("https://example.com/", StatusCode::NotAvailable, Some(&snapshot), &Options::default())?;
/// assert_eq!(report.full_page_words, 1);
/// # Ok::<(), page_signals::Error>(())
/// ```
pub fn assemble(
    url: &str,
    status_code: StatusCode,
    snapshot: Option<&PageSnapshot>,
    options: &Options,
) -> Result<PageReport> {
    extract::assemble(url, status_code, snapshot, options)
}

/// Parses `html` with `url` as its document URL and builds a report with
/// default options.
///
/// # Errors
///
/// See [`assemble`].
pub fn analyze(html: &str, url: &str, status_code: StatusCode) -> Result<PageReport> {
    let snapshot = PageSnapshot::parse(html, url);
    assemble(url, status_code, Some(&snapshot), &Options::default())
}

/// Like [`analyze`], but takes raw bytes and decodes them using the charset
/// declared in the document (UTF-8 when none is declared).
///
/// # Errors
///
/// See [`assemble`].
///
/// # Example
///
/// ```rust
/// use page_signals::{analyze_bytes, StatusCode};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9</title></head><body></body></html>";
/// let report = analyze_bytes(html, "", StatusCode::NotAvailable)?;
/// assert_eq!(report.page_title.as_deref(), Some("Café"));
/// # Ok::<(), page_signals::Error>(())
/// ```
pub fn analyze_bytes(html: &[u8], url: &str, status_code: StatusCode) -> Result<PageReport> {
    let snapshot = PageSnapshot::from_bytes(html, url);
    assemble(url, status_code, Some(&snapshot), &Options::default())
}
