// src/core/html.rs
// Thin helpers over `scraper` so the page specs read as selector lookups.

use scraper::{ElementRef, Selector};

use super::sanitize::join_stripped;
use crate::error::{Result, ScrapeError};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Parse(format!("bad selector '{css}': {e}")))
}

/// Visible text of an element, each text node trimmed.
pub fn stripped_text(el: ElementRef<'_>) -> String {
    join_stripped(el.text())
}

/// Stripped text of the first descendant matching `sel`, if any.
pub fn first_text(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    el.select(sel).next().map(stripped_text)
}
