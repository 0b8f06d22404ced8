//! Page extraction for the known Bandcamp page types
//!
//! Each submodule owns the selector catalog for one page type and turns a
//! fetched HTML document into its canonical record. Album and track pages
//! additionally consult the embedded JSON-LD block first; selector rules
//! fill whatever that block left empty. A rule that matches nothing
//! produces a field omission, never an error.

pub mod album;
pub mod artist;
pub mod listing;
pub mod search;
mod structured;
pub mod track;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

/// Title heading on album and track pages
static PAGE_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#name-section .trackTitle").unwrap());

/// Artist byline link on album and track pages
static PAGE_BYLINE: Lazy<Selector> = Lazy::new(|| Selector::parse("#name-section a").unwrap());

/// Tag links on album and track pages
static TRALBUM_TAGS: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".tralbum-tags a.tag").unwrap());

/// Trimmed text content of an element
fn text_of(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first match under `scope`, when non-empty
fn first_text(scope: ElementRef, selector: &Selector) -> Option<String> {
    scope.select(selector).next().and_then(|el| {
        let text = text_of(&el);
        (!text.is_empty()).then_some(text)
    })
}

/// Attribute of the first match under `scope`
fn first_attr(scope: ElementRef, selector: &Selector, attr: &str) -> Option<String> {
    scope
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::to_string)
}

/// Image URL of the first match, preferring `src` and falling back to the
/// lazy-load attribute `data-original` when `src` is absent or empty
fn image_src(scope: ElementRef, selector: &Selector) -> Option<String> {
    let img = scope.select(selector).next()?;
    img.value()
        .attr("src")
        .filter(|s| !s.is_empty())
        .or_else(|| img.value().attr("data-original").filter(|s| !s.is_empty()))
        .map(str::to_string)
}

/// All tag texts under `scope`, in page order, empties skipped
fn tag_list(scope: ElementRef, selector: &Selector) -> Vec<String> {
    scope
        .select(selector)
        .map(|el| text_of(&el))
        .filter(|t| !t.is_empty())
        .collect()
}
