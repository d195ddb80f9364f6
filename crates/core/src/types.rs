//! Core types: searchable items and the immutable index that holds them.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// One searchable record. Built only through [`Item::new`] or the index loader,
/// so `title_lc` and `aliases_lc` are always lowercase and never contain empty keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub url: String,
    pub title: String,
    pub title_lc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Display-cased aliases as written by the site build. Not used for matching.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases_lc: Vec<String>,
}

impl Item {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            url: url.into(),
            title_lc: title.to_lowercase(),
            title,
            summary: None,
            aliases: Vec::new(),
            aliases_lc: Vec::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        let summary = summary.into();
        self.summary = if summary.is_empty() { None } else { Some(summary) };
        self
    }

    /// Set display aliases; the lowercase match keys are derived from them.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self.aliases_lc = lowercase_keys(&self.aliases);
        self
    }

    /// Summary text for display; empty when absent.
    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }
}

/// Lowercase a list of keys, dropping empties; an empty alias never matches a
/// non-empty query, so it is dead weight in the index.
pub(crate) fn lowercase_keys(keys: &[String]) -> Vec<String> {
    keys.iter()
        .map(|k| k.to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

// ---------------------------------------------------------------------------
// Search index
// ---------------------------------------------------------------------------

/// Ordered, immutable collection of items. Created once per page load and shared
/// by reference; result order always follows the order here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    items: Vec<Item>,
}

impl SearchIndex {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl FromIterator<Item> for SearchIndex {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SearchIndex {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
