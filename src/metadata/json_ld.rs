//! JSON-LD Structured Data
//!
//! Every `<script type="application/ld+json">` block is reported, including
//! broken ones: a block that fails to parse is itself a finding and is tagged
//! `"Invalid JSON"`. Parsed blocks list every `@type` declared anywhere in
//! the structure (`@graph` members, nested authors, publishers, offers...).

use serde_json::Value;
use tracing::debug;

use crate::patterns::{INVALID_JSON_TYPE, JSON_LD_SELECTOR, UNKNOWN_TYPE};
use crate::result::JsonLdEntry;
use crate::snapshot::PageSnapshot;

/// Extract all JSON-LD blocks in document order.
///
/// Blocks whose trimmed text is empty are skipped. `max_depth` bounds the
/// nesting level searched for `@type` values.
#[must_use]
pub fn extract_json_ld(snapshot: &PageSnapshot, max_depth: usize) -> Vec<JsonLdEntry> {
    let mut entries = Vec::new();

    for script in snapshot.document().select(JSON_LD_SELECTOR).nodes() {
        let text = script.text();
        let raw = text.trim();
        if raw.is_empty() {
            continue;
        }

        entries.push(parse_block(raw, max_depth));
    }

    entries
}

/// Classify one block's text.
#[must_use]
pub fn parse_block(raw: &str, max_depth: usize) -> JsonLdEntry {
    let types = match serde_json::from_str::<Value>(raw) {
        Ok(value) => {
            let types = collect_types(&value, max_depth);
            if types.is_empty() {
                vec![UNKNOWN_TYPE.to_string()]
            } else {
                types
            }
        }
        Err(err) => {
            debug!(error = %err, "JSON-LD block is not valid JSON");
            vec![INVALID_JSON_TYPE.to_string()]
        }
    };

    JsonLdEntry {
        raw: raw.to_string(),
        types,
    }
}

/// Collect every `@type` string in `value`, first-seen order, deduplicated.
///
/// Walks objects and arrays with an explicit stack. The value of an `@type`
/// key contributes its string(s) but is not descended into. Containers
/// nested deeper than `max_depth` are skipped.
#[must_use]
pub fn collect_types(value: &Value, max_depth: usize) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    let mut stack: Vec<(&Value, usize)> = vec![(value, 0)];
    let mut truncated = false;

    while let Some((current, depth)) = stack.pop() {
        let children: Vec<&Value> = match current {
            Value::Array(items) => items.iter().collect(),
            Value::Object(map) => {
                if let Some(declared) = map.get("@type") {
                    for name in type_names(declared) {
                        if !types.iter().any(|t| t == name) {
                            types.push(name.to_string());
                        }
                    }
                }
                map.iter()
                    .filter(|(key, _)| key.as_str() != "@type")
                    .map(|(_, v)| v)
                    .collect()
            }
            _ => continue,
        };

        // Reverse so the stack pops children in document order.
        for child in children.into_iter().rev() {
            if !matches!(child, Value::Array(_) | Value::Object(_)) {
                continue;
            }
            if depth + 1 > max_depth {
                truncated = true;
                continue;
            }
            stack.push((child, depth + 1));
        }
    }

    if truncated {
        debug!(max_depth, "JSON-LD nesting exceeds depth bound, deeper values skipped");
    }

    types
}

/// String values of an `@type` entry: a single string or an array of them.
fn type_names(declared: &Value) -> Vec<&str> {
    match declared {
        Value::String(s) => vec![s.as_str()],
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect()
}
