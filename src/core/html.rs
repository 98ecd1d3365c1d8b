// src/core/html.rs
// Thin helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Selector};

use crate::error::{Result, ScrapeError};
use super::sanitize::normalize_ws;

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Config(format!("bad selector {css:?}: {e}")))
}

/// All descendant text of an element. Collapsed unless `raw`.
pub fn element_text(el: ElementRef<'_>, raw: bool) -> String {
    let text: String = el.text().collect();
    if raw { text } else { normalize_ws(&text) }
}

/// Short, single-line preview of an element for error messages.
pub fn snippet(el: ElementRef<'_>) -> String {
    let html = normalize_ws(&el.html());
    match html.char_indices().nth(80) {
        Some((cut, _)) => join!(&html[..cut], "…"),
        None => html,
    }
}
