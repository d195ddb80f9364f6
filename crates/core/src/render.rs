//! Result markup generation and HTML escaping.

use crate::types::Item;

/// Default number of results shown in the dropdown.
pub const MAX_RESULTS: usize = 12;

/// Escape text content: `&`, `<`, `>`.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value: text escaping plus both quote characters.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for one result: a link wrapping the bold title and a muted summary line.
pub fn render_entry(item: &Item) -> String {
    format!(
        r#"<a href="{}"><strong>{}</strong><div class="muted">{}</div></a>"#,
        escape_attr(&item.url),
        escape_html(&item.title),
        escape_html(item.summary_text()),
    )
}

/// Concatenated markup for the first `limit` items.
pub fn render_results(items: &[&Item], limit: usize) -> String {
    items.iter().take(limit).map(|item| render_entry(item)).collect()
}
