//! Report exports.
//!
//! Two views derived from a finished [`PageReport`]: a single-row CSV with
//! nested objects flattened into `parent_child` columns, and one standalone
//! JSON document per JSON-LD block.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::patterns::{INVALID_JSON_TYPE, TOOL_NAME, UNKNOWN_TYPE};
use crate::result::{JsonLdEntry, PageReport};

/// One JSON-LD block ready to be written to its own file.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonLdExport {
    /// `schema-<n>-<first type>.json`, `n` starting at 1.
    pub file_name: String,
    /// Parsed block with an injected `_meta` object.
    pub document: Value,
}

/// Flatten `report` into a header line and a value line.
///
/// Nested objects become `parent_child` columns in field order. `hreflang`
/// is joined with `"; "`; `jsonLdList` lists each block's types joined with
/// `", "`, blocks joined with `"; "`. Null values are empty cells.
///
/// # Errors
///
/// Fails only if the report cannot be serialized to JSON.
pub fn to_csv(report: &PageReport) -> serde_json::Result<String> {
    let value = serde_json::to_value(report)?;
    let mut columns = Vec::new();
    if let Value::Object(map) = &value {
        flatten_into(map, "", &mut columns);
    }

    let header: Vec<&str> = columns.iter().map(|(name, _)| name.as_str()).collect();
    let values: Vec<String> = columns.iter().map(|(_, cell)| csv_cell(cell)).collect();
    Ok(format!("{}\n{}", header.join(","), values.join(",")))
}

/// Walk one object level, appending `(column, value)` pairs.
///
/// Nesting is bounded by the report shape (at most three levels).
fn flatten_into(map: &Map<String, Value>, prefix: &str, columns: &mut Vec<(String, Value)>) {
    for (key, value) in map {
        let name = format!("{prefix}{key}");
        match value {
            Value::Object(child) => flatten_into(child, &format!("{name}_"), columns),
            Value::Array(items) => {
                let joined = if key == "jsonLdList" {
                    items
                        .iter()
                        .map(|item| block_types(item).join(", "))
                        .collect::<Vec<_>>()
                        .join("; ")
                } else {
                    items.iter().map(plain_text).collect::<Vec<_>>().join("; ")
                };
                columns.push((name, Value::String(joined)));
            }
            other => columns.push((name, other.clone())),
        }
    }
}

fn block_types(item: &Value) -> Vec<String> {
    item.get("types")
        .and_then(Value::as_array)
        .map(|types| types.iter().map(plain_text).collect())
        .unwrap_or_default()
}

fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Quote strings containing `,`, `"` or a newline; double embedded quotes.
fn csv_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => {
            let escaped = s.replace('"', "\"\"");
            if escaped.contains([',', '\n', '"']) {
                format!("\"{escaped}\"")
            } else {
                escaped
            }
        }
        other => other.to_string(),
    }
}

/// One export document per JSON-LD block, in report order.
///
/// Invalid blocks export as `{"error": "Invalid JSON", "raw": ...}`. A block
/// whose top-level value is not an object is wrapped as `{"data": value}`.
#[must_use]
pub fn json_ld_exports(report: &PageReport) -> Vec<JsonLdExport> {
    let exported_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    report
        .json_ld_list
        .iter()
        .enumerate()
        .map(|(index, entry)| JsonLdExport {
            file_name: export_file_name(index + 1, entry),
            document: export_document(entry, &exported_at),
        })
        .collect()
}

fn export_document(entry: &JsonLdEntry, exported_at: &str) -> Value {
    let parsed = if entry.is_invalid() {
        None
    } else {
        serde_json::from_str::<Value>(&entry.raw).ok()
    };

    let mut document = match parsed {
        Some(Value::Object(map)) => map,
        Some(other) => Map::from_iter([("data".to_string(), other)]),
        None => Map::from_iter([
            ("error".to_string(), Value::String(INVALID_JSON_TYPE.to_string())),
            ("raw".to_string(), Value::String(entry.raw.clone())),
        ]),
    };

    document.insert(
        "_meta".to_string(),
        serde_json::json!({
            "exportedBy": TOOL_NAME,
            "timestamp": exported_at,
        }),
    );
    Value::Object(document)
}

/// `schema-<n>-<type>.json` with ASCII non-alphanumerics in the type
/// replaced by `_`.
fn export_file_name(number: usize, entry: &JsonLdEntry) -> String {
    let first_type = entry.types.first().map_or(UNKNOWN_TYPE, String::as_str);
    let safe: String = first_type
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("schema-{number}-{safe}.json")
}

/// `seo-report-YYYY-MM-DD`, dated from the report timestamp.
///
/// Falls back to today's date when the timestamp does not parse.
#[must_use]
pub fn default_file_stem(report: &PageReport) -> String {
    let date = DateTime::parse_from_rfc3339(&report.timestamp)
        .map(|ts| ts.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());
    format!("seo-report-{}", date.format("%Y-%m-%d"))
}
