//! Character encoding detection for HTML read as raw bytes.
//!
//! Pages saved to disk or piped in keep their original encoding. The charset
//! declared near the top of the document picks the decoder; UTF-8 is the
//! fallback.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Bytes examined for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Detect character encoding from HTML bytes.
///
/// Only the first 1024 bytes are examined. A UTF-8 byte order mark wins over
/// any declaration.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    // The content-type form also matches the bare charset pattern, so it is
    // tried first to get the clean label.
    declared_label(&CONTENT_TYPE_CHARSET_RE, &head)
        .or_else(|| declared_label(&CHARSET_META_RE, &head))
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn declared_label(re: &Regex, head: &str) -> Option<String> {
    re.captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than failing.
///
/// # Examples
///
/// ```
/// use page_signals::encoding::decode_html;
///
/// let html = b"<html><head><meta charset=\"windows-1252\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
