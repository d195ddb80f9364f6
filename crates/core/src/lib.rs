//! SiteFind core — everything the search widget does that is not DOM plumbing.
//!
//! # Modules
//!
//! - [`types`] — Searchable items and the immutable index
//! - [`load`] — Index parsing with load-time validation
//! - [`matcher`] — Query normalization and substring filtering
//! - [`render`] — HTML escaping and result markup
//! - [`widget`] — Loading/ready state and results visibility state machine
//! - [`config`] — Widget configuration from defaults, TOML, or `data-*` attributes
//! - [`error`] — Error types

pub mod config;
pub mod error;
pub mod load;
pub mod matcher;
pub mod render;
pub mod types;
pub mod widget;

pub use config::{ConfigSource, WidgetConfig};
pub use error::{ConfigError, IndexError};
pub use load::{parse_index, LoadReport, SkipReason, SkippedRecord};
pub use matcher::{filter, Query};
pub use render::{escape_attr, escape_html, render_entry, render_results, MAX_RESULTS};
pub use types::{Item, SearchIndex};
pub use widget::{ClickTarget, IndexState, ResultsView, SearchWidget, Visibility};

/// The items the widget would show for `raw_query`, capped at `limit`.
///
/// Like [`SearchWidget::new`], a limit of zero is treated as one.
pub fn search<'a>(index: &'a SearchIndex, raw_query: &str, limit: usize) -> Vec<&'a Item> {
    let mut found = filter(index, &Query::parse(raw_query));
    found.truncate(limit.max(1));
    found
}
