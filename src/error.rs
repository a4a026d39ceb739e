//! Error types for page-signals.
//!
//! Only unanticipated faults are errors. Malformed JSON-LD, selectors that
//! fail to parse and missing optional tags are recovered where they occur
//! and show up in the report as findings or `None` values.

use std::fmt;

/// Extraction step that produced an [`ExtractError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Canonical, charset, language, meta tags and hreflang.
    Metadata,
    /// CSR/SSR classification.
    RenderType,
    /// Full-page and main-content text metrics.
    ContentMetrics,
    /// JSON-LD block discovery.
    StructuredData,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Metadata => "metadata",
            Self::RenderType => "render type",
            Self::ContentMetrics => "content metrics",
            Self::StructuredData => "structured data",
        };
        f.write_str(name)
    }
}

/// Failure inside a single extraction step.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The step panicked; the payload message is kept.
    #[error("extraction panicked: {0}")]
    Panicked(String),
}

/// Error type for report assembly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No page document was available to analyze.
    #[error("no target page to analyze")]
    NoTargetContext,

    /// An extraction step failed; no partial report is produced.
    #[error("extraction failed during {stage}: {source}")]
    ExtractionFailed {
        /// Step that failed.
        stage: Stage,
        /// Underlying cause.
        #[source]
        source: ExtractError,
    },
}

/// Result type alias for report assembly.
pub type Result<T> = std::result::Result<T, Error>;
