//! Index loading with load-time validation.
//!
//! The site build writes `search-index.json` as a JSON array of loosely shaped
//! objects. Every record is checked here, once, so the matcher only ever sees
//! well-formed [`Item`]s: records without a `url` or `title` are skipped and
//! reported, missing lowercase keys are derived, and present ones are normalized.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::IndexError;
use crate::types::{lowercase_keys, Item, SearchIndex};

/// Record shape as found on the wire. Every field is optional; validation decides.
#[derive(Deserialize)]
struct RawItem {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    title_lc: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    aliases: Option<Vec<String>>,
    #[serde(default)]
    aliases_lc: Option<Vec<String>>,
}

/// Why a record was left out of the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NotAnObject,
    MissingField(&'static str),
    Malformed(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotAnObject => f.write_str("record is not an object"),
            SkipReason::MissingField(field) => write!(f, "missing or empty `{field}`"),
            SkipReason::Malformed(msg) => write!(f, "malformed record: {msg}"),
        }
    }
}

/// A record rejected at load time, identified by its zero-based array position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub position: usize,
    pub reason: SkipReason,
}

/// Result of loading an index: the usable items plus everything that was dropped.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub index: SearchIndex,
    pub skipped: Vec<SkippedRecord>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Parse and validate an index document.
///
/// Fails only when the document as a whole is unusable (bad JSON, not an array).
/// Individual bad records are skipped and listed in [`LoadReport::skipped`].
pub fn parse_index(json: &str) -> Result<LoadReport, IndexError> {
    let value: Value = serde_json::from_str(json)?;
    let records = match value {
        Value::Array(records) => records,
        other => return Err(IndexError::NotAnArray(json_kind(&other))),
    };

    let total = records.len();
    let mut items = Vec::with_capacity(total);
    let mut skipped = Vec::new();

    for (position, record) in records.into_iter().enumerate() {
        match validate_record(record) {
            Ok(item) => items.push(item),
            Err(reason) => {
                warn!(position, reason = %reason, "Skipping search index record");
                skipped.push(SkippedRecord { position, reason });
            }
        }
    }

    info!(items = items.len(), skipped = skipped.len(), "Search index loaded");
    if total == 0 {
        debug!("Search index is empty");
    }

    Ok(LoadReport { index: SearchIndex::new(items), skipped })
}

fn validate_record(record: Value) -> Result<Item, SkipReason> {
    if !record.is_object() {
        return Err(SkipReason::NotAnObject);
    }
    let raw: RawItem =
        serde_json::from_value(record).map_err(|e| SkipReason::Malformed(e.to_string()))?;

    let url = non_empty(raw.url).ok_or(SkipReason::MissingField("url"))?;
    let title = non_empty(raw.title).ok_or(SkipReason::MissingField("title"))?;

    let title_lc = match non_empty(raw.title_lc) {
        Some(lc) => lc.to_lowercase(),
        None => title.to_lowercase(),
    };
    let aliases = raw.aliases.unwrap_or_default();
    let aliases_lc = match raw.aliases_lc {
        Some(keys) => lowercase_keys(&keys),
        None => lowercase_keys(&aliases),
    };

    Ok(Item {
        url,
        title,
        title_lc,
        summary: non_empty(raw.summary),
        aliases,
        aliases_lc,
    })
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_site_build_output() {
        let json = r#"[
            {
                "title": "Alpha",
                "title_lc": "alpha",
                "aliases": ["First Letter"],
                "aliases_lc": ["first letter"],
                "summary": "First",
                "url": "/pages/Alpha/"
            },
            {
                "title": "Beta",
                "title_lc": "beta",
                "aliases": [],
                "aliases_lc": [],
                "summary": "",
                "url": "/pages/Beta/"
            }
        ]"#;
        let report = parse_index(json).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.index.len(), 2);

        let alpha = &report.index.items()[0];
        assert_eq!(alpha.summary.as_deref(), Some("First"));
        assert_eq!(alpha.aliases_lc, vec!["first letter"]);

        let beta = &report.index.items()[1];
        assert!(beta.summary.is_none(), "empty summary should load as absent");
    }

    #[test]
    fn missing_title_lc_is_derived() {
        let report = parse_index(r#"[{"url": "/a", "title": "Alpha"}]"#).unwrap();
        assert_eq!(report.index.items()[0].title_lc, "alpha");
    }

    #[test]
    fn stored_keys_are_forced_lowercase() {
        let report = parse_index(
            r#"[{"url": "/a", "title": "Alpha", "title_lc": "ALPHA", "aliases_lc": ["Al", ""]}]"#,
        )
        .unwrap();
        let item = &report.index.items()[0];
        assert_eq!(item.title_lc, "alpha");
        assert_eq!(item.aliases_lc, vec!["al"]);
    }

    #[test]
    fn aliases_lc_falls_back_to_aliases() {
        let report =
            parse_index(r#"[{"url": "/b", "title": "Beta", "aliases": ["B-Item"]}]"#).unwrap();
        assert_eq!(report.index.items()[0].aliases_lc, vec!["b-item"]);
    }

    #[test]
    fn null_summary_is_absent() {
        let report =
            parse_index(r#"[{"url": "/a", "title": "Alpha", "summary": null}]"#).unwrap();
        assert!(report.index.items()[0].summary.is_none());
    }

    #[test]
    fn bad_records_are_skipped_with_positions() {
        let json = r#"[
            {"url": "/a", "title": "Alpha"},
            "not a record",
            {"title": "No Url"},
            {"url": "/c", "title": ""},
            {"url": "/d", "title": "Delta", "aliases_lc": "oops"},
            {"url": "/e", "title": "Echo"}
        ]"#;
        let report = parse_index(json).unwrap();

        let titles: Vec<&str> = report.index.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Echo"]);

        let positions: Vec<usize> = report.skipped.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
        assert_eq!(report.skipped[0].reason, SkipReason::NotAnObject);
        assert_eq!(report.skipped[1].reason, SkipReason::MissingField("url"));
        assert_eq!(report.skipped[2].reason, SkipReason::MissingField("title"));
        assert!(matches!(report.skipped[3].reason, SkipReason::Malformed(_)));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let report = parse_index(
            r#"[{"url": "/a", "title": "Alpha", "content": ["body"], "see_also": ["Beta"]}]"#,
        )
        .unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn top_level_object_is_rejected() {
        let err = parse_index(r#"{"items": []}"#).unwrap_err();
        assert!(matches!(err, IndexError::NotAnArray("an object")), "got {err:?}");
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = parse_index("[{").unwrap_err();
        assert!(matches!(err, IndexError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn empty_array_loads_empty_index() {
        let report = parse_index("[]").unwrap();
        assert!(report.index.is_empty());
        assert!(report.is_clean());
    }
}
