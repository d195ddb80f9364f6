//! Search widget state machine, independent of any DOM binding.
//!
//! The front end forwards three kinds of events here (index load finished, input
//! changed, document clicked) and then draws whatever [`ResultsView`] says. The
//! results container is either hidden or visible; its content is replaced
//! wholesale on every render.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::IndexError;
use crate::matcher::{filter, Query};
use crate::render::{render_results, MAX_RESULTS};
use crate::types::{Item, SearchIndex};

/// Whether the index is usable yet.
#[derive(Debug, Clone)]
pub enum IndexState {
    Loading,
    Ready(Arc<SearchIndex>),
    /// Load failed; the widget stays inert for the rest of the page's life.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// Where a document click landed, relative to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The input control itself.
    Input,
    /// Inside the results container, result links included.
    Results,
    Outside,
}

impl ClickTarget {
    /// Map the tag sent by the front end's click listener.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "input" => ClickTarget::Input,
            "results" => ClickTarget::Results,
            _ => ClickTarget::Outside,
        }
    }
}

/// What the results container should currently show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    markup: String,
    visibility: Visibility,
}

impl ResultsView {
    fn hidden() -> Self {
        Self { markup: String::new(), visibility: Visibility::Hidden }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Inline style for the container's `display` property.
    pub fn display_style(&self) -> &'static str {
        match self.visibility {
            Visibility::Visible => "display: block;",
            Visibility::Hidden => "display: none;",
        }
    }
}

pub struct SearchWidget {
    max_results: usize,
    index: IndexState,
    /// Latest query typed while the index was still loading.
    pending: Option<Query>,
    view: ResultsView,
}

impl SearchWidget {
    pub fn new(max_results: usize) -> Self {
        Self {
            max_results: max_results.max(1),
            index: IndexState::Loading,
            pending: None,
            view: ResultsView::hidden(),
        }
    }

    pub fn state(&self) -> &IndexState {
        &self.index
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.index, IndexState::Ready(_))
    }

    pub fn view(&self) -> &ResultsView {
        &self.view
    }

    /// Record the outcome of the index fetch. Only the first outcome counts.
    ///
    /// A query typed during loading is applied as soon as the index is ready.
    pub fn index_loaded(&mut self, result: Result<SearchIndex, IndexError>) {
        if !matches!(self.index, IndexState::Loading) {
            debug!("Ignoring repeated index load");
            return;
        }
        match result {
            Ok(index) => {
                self.index = IndexState::Ready(Arc::new(index));
                if let Some(query) = self.pending.take() {
                    debug!(query = %query, "Applying query typed during load");
                    self.apply(&query);
                }
            }
            Err(e) => {
                warn!(error = %e, "Search index unavailable; search disabled");
                self.index = IndexState::Failed(e.to_string());
                self.pending = None;
                self.render(&[]);
            }
        }
    }

    /// Handle a change of the input control's value.
    pub fn on_input(&mut self, raw: &str) {
        let query = Query::parse(raw);
        match self.index {
            IndexState::Ready(_) => self.apply(&query),
            IndexState::Loading => {
                self.pending = if query.is_empty() { None } else { Some(query) };
                self.render(&[]);
            }
            IndexState::Failed(_) => {}
        }
    }

    /// Handle a click anywhere in the document. Only outside clicks dismiss, and
    /// dismissal keeps the content so the next render starts from the same markup.
    pub fn on_document_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Outside {
            self.view.visibility = Visibility::Hidden;
        }
    }

    /// Show `items` (capped), or hide and clear the container when there are none.
    pub fn render(&mut self, items: &[&Item]) {
        if items.is_empty() {
            self.view = ResultsView::hidden();
            return;
        }
        self.view = ResultsView {
            markup: render_results(items, self.max_results),
            visibility: Visibility::Visible,
        };
    }

    fn apply(&mut self, query: &Query) {
        let index = match &self.index {
            IndexState::Ready(index) => Arc::clone(index),
            _ => return,
        };
        let found = filter(&index, query);
        self.render(&found);
    }
}

impl Default for SearchWidget {
    fn default() -> Self {
        Self::new(MAX_RESULTS)
    }
}
