//! Query normalization and substring filtering.
//!
//! Matching is plain case-insensitive containment against an item's lowercase
//! title and alias keys. No scoring: results keep the index's own order.

use crate::types::{Item, SearchIndex};

/// A normalized query: trimmed and lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn parse(raw: &str) -> Self {
        Query(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Item {
    /// True if the title key or any alias key contains the query.
    pub fn matches(&self, query: &Query) -> bool {
        let q = query.as_str();
        self.title_lc.contains(q) || self.aliases_lc.iter().any(|alias| alias.contains(q))
    }
}

/// Every item matching `query`, in index order. An empty query matches nothing.
///
/// Not capped; the renderer applies the display limit.
pub fn filter<'a>(index: &'a SearchIndex, query: &Query) -> Vec<&'a Item> {
    if query.is_empty() {
        return Vec::new();
    }
    index.iter().filter(|item| item.matches(query)).collect()
}
