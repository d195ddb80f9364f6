//! Index download. One GET, no retry, no caching.

use reqwest::Url;
use sitefind_core::{parse_index, IndexError, SearchIndex};

/// Fetch and validate the index at `index_url`, resolved against the page URL.
pub async fn fetch_index(index_url: &str) -> Result<SearchIndex, IndexError> {
    let url = resolve(index_url)?;
    let response = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| IndexError::Fetch(e.to_string()))?;
    let body = response.text().await.map_err(|e| IndexError::Fetch(e.to_string()))?;
    Ok(parse_index(&body)?.index)
}

fn resolve(index_url: &str) -> Result<Url, IndexError> {
    let page = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .ok_or_else(|| IndexError::Fetch("page URL unavailable".to_string()))?;
    Url::parse(&page)
        .and_then(|base| base.join(index_url))
        .map_err(|e| IndexError::Fetch(format!("bad index URL {index_url}: {e}")))
}
