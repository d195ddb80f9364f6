//! SiteFind widget — Dioxus web front end for a static site's search index.
//!
//! The host page provides one mount element (`<div id="site-search">` by default,
//! optionally carrying `data-*` config). Without it the widget does nothing.

use dioxus::prelude::*;

mod app;
mod fetch;
mod host;

use app::App;

fn main() {
    // Mount lookup and attribute parsing log before launch; the launcher skips
    // logger setup once a subscriber exists.
    dioxus::logger::initialize_default();

    let Some(config) = host::read_config() else {
        return;
    };

    LaunchBuilder::web()
        .with_cfg(dioxus::web::Config::new().rootname(config.mount_id.clone()))
        .with_context(config)
        .launch(App);
}
