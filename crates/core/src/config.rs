//! Widget configuration: defaults, `.sitefind.toml`, and `data-*` attributes.
//!
//! Both sources go through [`WidgetConfig::set`], so a key means the same thing
//! whether it comes from a file next to the site or from the mount element.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::render::MAX_RESULTS;

/// File name looked up in the working directory by [`WidgetConfig::load`].
pub const CONFIG_FILE: &str = ".sitefind.toml";

/// Known configuration keys, for validation and typo suggestions.
const KNOWN_CONFIG_KEYS: &[&str] =
    &["index_url", "mount_id", "input_id", "results_id", "max_results", "placeholder"];

/// Keys the mount element may not set on itself: the element is found by this id
/// before its attributes are read.
const FILE_ONLY_KEYS: &[&str] = &["mount_id"];

/// Where a setting was read from, named in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Attribute,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File => f.write_str(CONFIG_FILE),
            ConfigSource::Attribute => f.write_str("data-* attribute"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Path or URL of the index, resolved against the page URL.
    pub index_url: String,
    /// Host element the widget mounts into. Absent element = widget does nothing.
    pub mount_id: String,
    pub input_id: String,
    pub results_id: String,
    pub max_results: usize,
    pub placeholder: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            index_url: "/search-index.json".to_string(),
            mount_id: "site-search".to_string(),
            input_id: "search-input".to_string(),
            results_id: "search-results".to_string(),
            max_results: MAX_RESULTS,
            placeholder: "Search\u{2026}".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Load `.sitefind.toml` from `dir`, or defaults if there is none.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        debug!(path = %path.display(), "Loading config");
        let content = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::Read { path: path.clone(), source })?;
        let table = content
            .parse::<toml::Table>()
            .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;
        Self::from_table(&table)
    }

    /// Build from a parsed TOML table. Unknown keys are warned about, not rejected.
    pub fn from_table(table: &toml::Table) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for (key, value) in table {
            if !KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
                warn_unknown_key(key, ConfigSource::File);
                continue;
            }
            let value = match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Integer(i) => i.to_string(),
                other => {
                    return Err(ConfigError::InvalidValue {
                        key: key.clone(),
                        value: other.to_string(),
                    })
                }
            };
            config.set(key, &value)?;
        }
        Ok(config)
    }

    /// The `data-*` attribute for every key the mount element may set
    /// (`max_results` → `data-max-results`).
    pub fn data_attribute_names() -> impl Iterator<Item = String> {
        KNOWN_CONFIG_KEYS
            .iter()
            .filter(|k| !FILE_ONLY_KEYS.contains(k))
            .map(|k| format!("data-{}", k.replace('_', "-")))
    }

    /// Apply `data-*` attributes from the mount element, e.g.
    /// `data-index-url="/wiki/search-index.json"` or `data-max-results="8"`.
    ///
    /// Each attribute stands alone: an invalid value leaves that key at its
    /// previous value and is returned, the rest still apply. Attributes that are
    /// not `data-*` are ignored, and so is `data-mount-id`.
    pub fn apply_attributes<'a, I>(&mut self, attrs: I) -> Vec<ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut rejected = Vec::new();
        for (name, value) in attrs {
            let Some(key) = name.strip_prefix("data-") else {
                continue;
            };
            let key = key.replace('-', "_");
            if FILE_ONLY_KEYS.contains(&key.as_str()) {
                warn!(key = key.as_str(), "Ignoring {name}; set it in {CONFIG_FILE} instead");
                continue;
            }
            if !KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
                warn_unknown_key(&key, ConfigSource::Attribute);
                continue;
            }
            if let Err(e) = self.set(&key, value) {
                rejected.push(e);
            }
        }
        rejected
    }

    /// Set one key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue { key: key.to_string(), value: value.to_string() };
        match key {
            "index_url" | "mount_id" | "input_id" | "results_id" if value.trim().is_empty() => {
                return Err(invalid());
            }
            "index_url" => self.index_url = value.to_string(),
            "mount_id" => self.mount_id = value.to_string(),
            "input_id" => self.input_id = value.to_string(),
            "results_id" => self.results_id = value.to_string(),
            "placeholder" => self.placeholder = value.to_string(),
            "max_results" => {
                let n: usize = value.trim().parse().map_err(|_| invalid())?;
                if n == 0 {
                    return Err(invalid());
                }
                self.max_results = n;
            }
            _ => return Err(invalid()),
        }
        Ok(())
    }
}

fn warn_unknown_key(key: &str, source: ConfigSource) {
    match suggest_key(key) {
        Some(s) => warn!(key, %source, "Unknown key in {source}; did you mean '{s}'?"),
        None => warn!(
            key,
            %source,
            "Unknown key in {source} (known keys: {})",
            KNOWN_CONFIG_KEYS.join(", ")
        ),
    }
}

/// Closest known key within three edits, if any.
fn suggest_key(key: &str) -> Option<&'static str> {
    KNOWN_CONFIG_KEYS
        .iter()
        .map(|k| (*k, edit_distance(key, k)))
        .min_by_key(|&(_, d)| d)
        .filter(|&(_, d)| d <= 3)
        .map(|(k, _)| k)
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_layout() {
        let c = WidgetConfig::default();
        assert_eq!(c.index_url, "/search-index.json");
        assert_eq!(c.max_results, 12);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(WidgetConfig::load(dir.path()).unwrap(), WidgetConfig::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "index_url = \"/wiki/search-index.json\"\nmax_results = 5\n",
        )
        .unwrap();
        let c = WidgetConfig::load(dir.path()).unwrap();
        assert_eq!(c.index_url, "/wiki/search-index.json");
        assert_eq!(c.max_results, 5);
        assert_eq!(c.input_id, "search-input");
    }

    #[test]
    fn unparseable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "max_results = = 3").unwrap();
        let err = WidgetConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn unknown_keys_are_skipped() {
        let table: toml::Table = "max_resluts = 3\ntheme = \"dark\"".parse().unwrap();
        let c = WidgetConfig::from_table(&table).unwrap();
        assert_eq!(c.max_results, 12);
    }

    #[test]
    fn zero_or_negative_max_results_rejected() {
        let table: toml::Table = "max_results = 0".parse().unwrap();
        assert!(WidgetConfig::from_table(&table).is_err());
        let table: toml::Table = "max_results = -4".parse().unwrap();
        assert!(WidgetConfig::from_table(&table).is_err());
    }

    #[test]
    fn wrong_value_type_rejected() {
        let table: toml::Table = "index_url = true".parse().unwrap();
        let err = WidgetConfig::from_table(&table).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "index_url"));
    }

    #[test]
    fn data_attributes_apply() {
        let mut c = WidgetConfig::default();
        let rejected = c.apply_attributes([
            ("id", "site-search"),
            ("data-index-url", "/docs/search-index.json"),
            ("data-max-results", "8"),
            ("class", "search"),
        ]);
        assert!(rejected.is_empty(), "unexpected rejections: {rejected:?}");
        assert_eq!(c.index_url, "/docs/search-index.json");
        assert_eq!(c.max_results, 8);
    }

    #[test]
    fn attribute_names_round_trip_through_apply() {
        let names: Vec<String> = WidgetConfig::data_attribute_names().collect();
        assert!(names.contains(&"data-index-url".to_string()));
        assert!(names.contains(&"data-max-results".to_string()));

        let mut c = WidgetConfig::default();
        let attrs: Vec<(String, String)> =
            names.into_iter().filter(|n| n == "data-placeholder").map(|n| (n, "Find".to_string())).collect();
        assert!(c.apply_attributes(attrs.iter().map(|(n, v)| (n.as_str(), v.as_str()))).is_empty());
        assert_eq!(c.placeholder, "Find");
    }

    #[test]
    fn bad_data_attribute_is_rejected_alone() {
        let mut c = WidgetConfig::default();
        let rejected = c.apply_attributes([
            ("data-index-url", "/docs/search-index.json"),
            ("data-max-results", "lots"),
            ("data-placeholder", "Find a page"),
        ]);
        assert_eq!(rejected.len(), 1);
        assert!(
            matches!(rejected[0], ConfigError::InvalidValue { ref key, .. } if key == "max_results")
        );
        assert_eq!(c.index_url, "/docs/search-index.json", "valid attributes must survive");
        assert_eq!(c.placeholder, "Find a page");
        assert_eq!(c.max_results, 12);
    }

    #[test]
    fn mount_id_cannot_be_set_from_attributes() {
        assert!(!WidgetConfig::data_attribute_names().any(|n| n == "data-mount-id"));

        let mut c = WidgetConfig::default();
        let rejected = c.apply_attributes([("data-mount-id", "elsewhere")]);
        assert!(rejected.is_empty());
        assert_eq!(c.mount_id, "site-search");
    }

    #[test]
    fn mount_id_can_be_set_from_file() {
        let table: toml::Table = "mount_id = \"wiki-search\"".parse().unwrap();
        assert_eq!(WidgetConfig::from_table(&table).unwrap().mount_id, "wiki-search");
    }

    #[test]
    fn typo_suggestions() {
        assert_eq!(suggest_key("max_resluts"), Some("max_results"));
        assert_eq!(suggest_key("index-url"), Some("index_url"));
        assert_eq!(suggest_key("colour_scheme"), None);
    }

    #[test]
    fn source_names_in_diagnostics() {
        assert_eq!(ConfigSource::File.to_string(), ".sitefind.toml");
        assert_eq!(ConfigSource::Attribute.to_string(), "data-* attribute");
    }

    #[test]
    fn edit_distance_basics() {
        assert_eq!(edit_distance("max_resluts", "max_results"), 2);
        assert_eq!(edit_distance("", "abc"), 3);
    }
}
