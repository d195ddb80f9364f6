//! Root component: the search input and the results dropdown.

use dioxus::prelude::*;
use sitefind_core::{ClickTarget, SearchWidget, WidgetConfig};
use tracing::warn;

use crate::fetch::fetch_index;

/// Reports every document click as "input", "results", or "outside".
const CLICK_LISTENER: &str = r#"
const [inputId, resultsId] = await dioxus.recv();
document.addEventListener("click", (event) => {
    const input = document.getElementById(inputId);
    const results = document.getElementById(resultsId);
    let tag = "outside";
    if (input && event.target === input) {
        tag = "input";
    } else if (results && results.contains(event.target)) {
        tag = "results";
    }
    dioxus.send(tag);
});
"#;

#[component]
pub fn App() -> Element {
    let config = use_context::<WidgetConfig>();
    let max_results = config.max_results;
    let mut widget = use_signal(move || SearchWidget::new(max_results));

    // Index load, the only suspension point. Input before it resolves is held
    // as a pending query by the widget.
    let index_url = config.index_url.clone();
    use_future(move || {
        let index_url = index_url.clone();
        async move {
            let result = fetch_index(&index_url).await;
            widget.write().index_loaded(result);
        }
    });

    // Outside-click dismissal
    let ids = (config.input_id.clone(), config.results_id.clone());
    use_future(move || {
        let ids = ids.clone();
        async move {
            let mut listener = document::eval(CLICK_LISTENER);
            if let Err(e) = listener.send(ids) {
                warn!(error = ?e, "Could not install click listener");
                return;
            }
            while let Ok(tag) = listener.recv::<String>().await {
                widget.write().on_document_click(ClickTarget::from_tag(&tag));
            }
        }
    });

    let state = widget.read();
    let view = state.view();

    rsx! {
        input {
            id: "{config.input_id}",
            class: "search-input",
            r#type: "search",
            autocomplete: "off",
            placeholder: "{config.placeholder}",
            oninput: move |e: Event<FormData>| {
                widget.write().on_input(&e.value());
            },
        }
        div {
            id: "{config.results_id}",
            class: "search-results",
            style: "{view.display_style()}",
            dangerous_inner_html: "{view.markup()}",
        }
    }
}
