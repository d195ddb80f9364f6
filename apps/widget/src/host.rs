//! Host page lookups: find the mount element and read its `data-*` config.

use sitefind_core::WidgetConfig;
use tracing::{debug, warn};

/// Config for this page, or `None` when there is nothing to mount into.
pub fn read_config() -> Option<WidgetConfig> {
    let document = web_sys::window()?.document()?;
    let mut config = WidgetConfig::default();

    let Some(mount) = document.get_element_by_id(&config.mount_id) else {
        debug!(mount_id = %config.mount_id, "No mount element; search widget inactive");
        return None;
    };

    let attrs: Vec<(String, String)> = WidgetConfig::data_attribute_names()
        .filter_map(|name| mount.get_attribute(&name).map(|value| (name, value)))
        .collect();
    for e in config.apply_attributes(attrs.iter().map(|(n, v)| (n.as_str(), v.as_str()))) {
        warn!(error = %e, "Ignoring invalid widget attribute");
    }

    Some(config)
}
