//! URL Utility Functions
//!
//! Resolution of `href` attributes the way a browser's `element.href`
//! property reports them: absolute, against the document base.

use url::Url;

/// Parse an absolute URL, ignoring surrounding whitespace.
///
/// Returns `None` for relative references and unparseable input.
#[must_use]
pub fn parse_absolute(s: &str) -> Option<Url> {
    Url::parse(s.trim()).ok()
}

/// Resolve an `href` attribute value against an optional base.
///
/// Without a base, or when joining fails, the trimmed value is returned
/// unchanged. An empty `href` resolves to the base itself.
#[must_use]
pub fn resolve_href(href: &str, base: Option<&Url>) -> String {
    let href = href.trim();

    match base {
        Some(base) => match base.join(href) {
            Ok(resolved) => resolved.to_string(),
            Err(_) => href.to_string(),
        },
        None => parse_absolute(href).map_or_else(|| href.to_string(), |u| u.to_string()),
    }
}
