//! Report types.
//!
//! [`PageReport`] is the single output of an analysis. Its JSON field names
//! are the interchange format consumed by exporters and renderers, so serde
//! renames pin them.

use std::fmt;
use std::str::FromStr;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// How the page's visible content was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenderType {
    /// Client-side rendering: content is injected by script.
    #[serde(rename = "CSR")]
    Csr,
    /// Server-side rendering: content is present in the markup.
    #[serde(rename = "SSR")]
    Ssr,
}

impl fmt::Display for RenderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Csr => "CSR",
            Self::Ssr => "SSR",
        })
    }
}

/// HTTP status of the page, observed out-of-band.
///
/// Serialized as an integer, or the string `"N/A"` when unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusCode {
    /// Observed status code.
    Code(u16),
    /// No status was observed.
    #[default]
    NotAvailable,
}

impl Serialize for StatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Code(code) => serializer.serialize_u16(*code),
            Self::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::NotAvailable => f.write_str("N/A"),
        }
    }
}

impl From<Option<u16>> for StatusCode {
    fn from(code: Option<u16>) -> Self {
        code.map_or(Self::NotAvailable, Self::Code)
    }
}

impl FromStr for StatusCode {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("n/a") {
            return Ok(Self::NotAvailable);
        }
        s.parse().map(Self::Code)
    }
}

/// One category of SEO meta tags: a fixed, ordered key list with optional
/// `content` values.
///
/// Every key is present even when the tag is missing, so consumers can show
/// a "missing" state per field. Serializes as a JSON object in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaGroup {
    entries: Vec<(String, Option<String>)>,
}

impl MetaGroup {
    /// Builds a group from `(key, value)` pairs in the given order.
    #[must_use]
    pub fn from_entries(entries: Vec<(String, Option<String>)>) -> Self {
        Self { entries }
    }

    /// Value for `key`. `None` when the key is unknown or the tag is missing.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Whether `key` belongs to this group, regardless of value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the group declares no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for MetaGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// SEO meta tags grouped by family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetas {
    /// description, keywords, author, robots, viewport.
    pub general: MetaGroup,
    /// og:title, og:description, og:image, og:type, og:url.
    pub open_graph: MetaGroup,
    /// twitter:card, twitter:title, twitter:description, twitter:image, twitter:site.
    pub twitter_card: MetaGroup,
}

/// One embedded JSON-LD block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonLdEntry {
    /// Trimmed script text, verbatim.
    pub raw: String,
    /// Declared `@type` values in first-seen order, or a single sentinel.
    /// Never empty.
    pub types: Vec<String>,
}

impl JsonLdEntry {
    /// True when the block failed to parse as JSON.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.types.len() == 1 && self.types[0] == crate::patterns::INVALID_JSON_TYPE
    }
}

/// Character and word counts of a rendered text span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextMetrics {
    /// Unicode scalar values of the rendered text.
    pub characters: usize,
    /// Whitespace tokens, or ideographs for CJK pages.
    pub words: usize,
}

/// Identifies the tool that produced a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMeta {
    /// Producing tool.
    pub tool: String,
    /// Tool version.
    pub version: String,
}

impl Default for ReportMeta {
    fn default() -> Self {
        Self {
            tool: crate::patterns::TOOL_NAME.to_string(),
            version: crate::patterns::TOOL_VERSION.to_string(),
        }
    }
}

/// Document-level metadata read from the head and root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// Collapsed `<title>` text.
    pub page_title: Option<String>,
    /// Resolved canonical URL.
    pub canonical: Option<String>,
    /// Declared `meta charset`.
    pub charset: Option<String>,
    /// `Content-Language` declaration, else root `lang`.
    pub content_language: Option<String>,
    /// Categorized meta tags.
    pub seo_metas: SeoMetas,
    /// `lang:url` alternates in document order.
    pub hreflang: Vec<String>,
}

/// Report describing one analyzed page.
///
/// Built once by [`crate::assemble`]; fields are read-only by convention and
/// the type has no mutating methods.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    /// Page URL as supplied by the caller.
    pub url: String,
    /// Generation time, ISO-8601 UTC with milliseconds.
    pub timestamp: String,
    /// HTTP status observed for the page.
    pub status_code: StatusCode,
    /// Producing tool and version.
    #[serde(rename = "_meta")]
    pub meta: ReportMeta,
    /// CSR/SSR classification.
    pub render_type: RenderType,
    /// Document title.
    pub page_title: Option<String>,
    /// Resolved canonical URL.
    pub canonical: Option<String>,
    /// Declared charset.
    pub charset: Option<String>,
    /// Declared or root language.
    pub content_language: Option<String>,
    /// Categorized meta tags.
    pub seo_metas: SeoMetas,
    /// `lang:url` alternates.
    pub hreflang: Vec<String>,
    /// Rendered characters of the whole body.
    #[serde(rename = "fullPage_characters")]
    pub full_page_characters: usize,
    /// Words of the whole body.
    #[serde(rename = "fullPage_words")]
    pub full_page_words: usize,
    /// Rendered characters of the main content region.
    #[serde(rename = "mainContent_characters")]
    pub main_content_characters: usize,
    /// Words of the main content region.
    #[serde(rename = "mainContent_words")]
    pub main_content_words: usize,
    /// JSON-LD blocks in document order.
    pub json_ld_list: Vec<JsonLdEntry>,
}

impl PageReport {
    /// Serializes the report as JSON.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
