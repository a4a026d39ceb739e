//! Locale-aware character and word counting.
//!
//! Pages written in Chinese have no spaces between words, so counting
//! whitespace tokens would report a whole paragraph as one word. For those
//! pages every CJK ideograph counts as one word-equivalent unit instead.
//! The locale decision is made once per page and applied to every span.

use tracing::debug;

use crate::dom;
use crate::patterns::{CJK_IDEOGRAPH, CJK_LANG_PREFIX};
use crate::result::TextMetrics;
use crate::snapshot::PageSnapshot;

/// Count characters and words of rendered text.
///
/// Characters are Unicode scalar values. Words are ideographs when
/// `is_cjk`, otherwise whitespace-delimited non-empty tokens.
#[must_use]
pub fn count_chars_and_words(text: &str, is_cjk: bool) -> TextMetrics {
    let words = if is_cjk {
        count_ideographs(text)
    } else {
        text.split_whitespace().count()
    };

    TextMetrics {
        characters: text.chars().count(),
        words,
    }
}

/// Number of CJK unified ideographs in `text`.
#[must_use]
pub fn count_ideographs(text: &str) -> usize {
    CJK_IDEOGRAPH.find_iter(text).count()
}

/// Share of ideographs among non-whitespace characters.
///
/// The denominator is at least 1, so text without visible characters has a
/// ratio of 0.
#[must_use]
pub fn ideograph_ratio(text: &str) -> f64 {
    let visible = text.chars().filter(|c| !c.is_whitespace()).count().max(1);
    count_ideographs(text) as f64 / visible as f64
}

/// Decide whether the page is predominantly CJK.
///
/// In order: root `lang` starting with `zh`; a `Content-Language`
/// http-equiv declaration starting with `zh`; finally the ideograph ratio of
/// `full_text` strictly above `threshold`.
#[must_use]
pub fn detect_cjk(snapshot: &PageSnapshot, full_text: &str, threshold: f64) -> bool {
    let doc = snapshot.document();

    let root_lang = dom::first(doc, "html")
        .and_then(|html| dom::get_attribute(&html, "lang"))
        .unwrap_or_default();
    if has_cjk_prefix(&root_lang) {
        debug!(lang = %root_lang, "CJK page by root lang");
        return true;
    }

    if let Some(declared) = crate::metadata::meta_tags::http_equiv_content(doc, "content-language") {
        if has_cjk_prefix(&declared) {
            debug!(lang = %declared, "CJK page by Content-Language");
            return true;
        }
    }

    let ratio = ideograph_ratio(full_text);
    let is_cjk = ratio > threshold;
    debug!(ratio, threshold, is_cjk, "CJK decision by sampled text");
    is_cjk
}

fn has_cjk_prefix(lang: &str) -> bool {
    lang.trim().to_lowercase().starts_with(CJK_LANG_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokens_for_latin_text() {
        let m = count_chars_and_words("  Hello   world,\nthis is\ta test ", false);
        assert_eq!(m.words, 6);
        assert_eq!(m.characters, 32);
    }

    #[test]
    fn test_ideographs_for_cjk_text() {
        let m = count_chars_and_words("你好，世界 hello", true);
        assert_eq!(m.words, 4);
        assert_eq!(m.characters, 11);
    }

    #[test]
    fn test_empty_text_counts_zero() {
        assert_eq!(count_chars_and_words("", false), TextMetrics::default());
        assert_eq!(count_chars_and_words("   ", true).words, 0);
    }

    #[test]
    fn test_ratio_ignores_whitespace() {
        // 3 ideographs out of 6 visible characters
        assert!((ideograph_ratio("中 文 字 abc") - 0.5).abs() < f64::EPSILON);
        assert_eq!(ideograph_ratio("   "), 0.0);
    }

    #[test]
    fn test_root_lang_wins_regardless_of_text() {
        let snap = PageSnapshot::parse(r#"<html lang="zh-CN"><body>all english</body></html>"#, "");
        assert!(detect_cjk(&snap, "all english", 0.3));
    }

    #[test]
    fn test_content_language_meta_is_second_signal() {
        let snap = PageSnapshot::parse(
            r#"<html><head><meta http-equiv="content-language" content="ZH-TW"></head><body>x</body></html>"#,
            "",
        );
        assert!(detect_cjk(&snap, "x", 0.3));
    }

    #[test]
    fn test_ratio_threshold_is_strict() {
        let snap = PageSnapshot::parse("<html><body></body></html>", "");
        // 3 of 10 visible characters: exactly 0.3 is not CJK
        assert!(!detect_cjk(&snap, "中文字abcdefg", 0.3));
        // 4 of 10: above threshold
        assert!(detect_cjk(&snap, "中文字字abcdef", 0.3));
    }

    #[test]
    fn test_english_page_is_not_cjk() {
        let snap = PageSnapshot::parse(r#"<html lang="en"><body>Hello</body></html>"#, "");
        assert!(!detect_cjk(&snap, "Hello", 0.3));
    }
}
