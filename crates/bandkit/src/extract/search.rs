//! Search result page extraction

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;

use super::{first_text, image_src, tag_list, text_of};
use crate::types::{Pagination, ResultKind, SearchResponse, SearchResult};

static RESULT_BLOCK: Lazy<Selector> = Lazy::new(|| Selector::parse(".searchresult").unwrap());
static ITEM_TYPE: Lazy<Selector> = Lazy::new(|| Selector::parse(".itemtype").unwrap());
static HEADING_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse(".heading a").unwrap());
static SUBHEAD: Lazy<Selector> = Lazy::new(|| Selector::parse(".subhead").unwrap());
static ART_IMAGE: Lazy<Selector> = Lazy::new(|| Selector::parse(".art img").unwrap());
static TAG: Lazy<Selector> = Lazy::new(|| Selector::parse(".tag").unwrap());
static RELEASED: Lazy<Selector> = Lazy::new(|| Selector::parse(".released").unwrap());
static GENRE: Lazy<Selector> = Lazy::new(|| Selector::parse(".genre").unwrap());

/// Strip a literal prefix when present, keeping the rest as-is
fn strip_label(text: String, prefix: &str) -> String {
    match text.strip_prefix(prefix) {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

/// Parse a search results page.
///
/// Result blocks without a titled heading link are dropped. `page` is
/// echoed into the pagination info; `items` counts what this page
/// actually yielded, not a site-wide total.
pub fn parse(html: &str, page: u32) -> SearchResponse {
    let doc = Html::parse_document(html);
    let root = doc.root_element();

    let mut results = Vec::new();
    for block in root.select(&RESULT_BLOCK) {
        let Some(heading) = block.select(&HEADING_LINK).next() else {
            continue;
        };
        let title = text_of(&heading);
        if title.is_empty() {
            continue;
        }
        let url = heading.value().attr("href").unwrap_or_default().to_string();

        let kind = first_text(block, &ITEM_TYPE)
            .map(|label| ResultKind::from_label(&label.to_lowercase()))
            .unwrap_or_default();

        results.push(SearchResult {
            kind,
            title,
            url,
            subhead: first_text(block, &SUBHEAD),
            image: image_src(block, &ART_IMAGE),
            tags: tag_list(block, &TAG),
            released: first_text(block, &RELEASED).map(|t| strip_label(t, "released ")),
            genre: first_text(block, &GENRE).map(|t| strip_label(t, "genre: ")),
        });
    }

    debug!(count = results.len(), page, "Parsed search results");

    SearchResponse {
        pagination: Pagination {
            page,
            items: results.len(),
        },
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r#"
        <ul>
          <li class="searchresult">
            <div class="art"><img src="https://f4.bcbits.com/img/a1.jpg"></div>
            <div class="itemtype">ALBUM</div>
            <div class="heading"><a href="https://boc.bandcamp.com/album/geogaddi">Geogaddi</a></div>
            <div class="subhead">by Boards of Canada</div>
            <div class="released">released February 18, 2002</div>
            <div class="tags">tag: <a class="tag">idm</a> <a class="tag">ambient</a></div>
          </li>
          <li class="searchresult">
            <div class="itemtype">ARTIST</div>
            <div class="heading"><a href="https://boc.bandcamp.com">Boards of Canada</a></div>
            <div class="genre">genre: electronic</div>
          </li>
        </ul>
    "#;

    #[test]
    fn test_parse_results() {
        let response = parse(RESULTS_PAGE, 1);
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.pagination.page, 1);
        assert_eq!(response.pagination.items, 2);

        let album = &response.results[0];
        assert_eq!(album.kind, ResultKind::Album);
        assert_eq!(album.title, "Geogaddi");
        assert_eq!(album.url, "https://boc.bandcamp.com/album/geogaddi");
        assert_eq!(album.subhead.as_deref(), Some("by Boards of Canada"));
        assert_eq!(album.image.as_deref(), Some("https://f4.bcbits.com/img/a1.jpg"));
        assert_eq!(album.tags, vec!["idm", "ambient"]);
        assert_eq!(album.released.as_deref(), Some("February 18, 2002"));
        assert_eq!(album.genre, None);

        let artist = &response.results[1];
        assert_eq!(artist.kind, ResultKind::Artist);
        assert!(artist.tags.is_empty());
        assert_eq!(artist.genre.as_deref(), Some("electronic"));
    }

    #[test]
    fn test_titleless_block_dropped() {
        // Block has type, image and tags but no heading link at all
        let html = r#"
            <li class="searchresult">
              <div class="itemtype">ALBUM</div>
              <div class="art"><img src="x.jpg"></div>
              <div class="tags"><a class="tag">noise</a></div>
            </li>
            <li class="searchresult">
              <div class="heading"><a href="/t">Kept</a></div>
            </li>
        "#;
        let response = parse(html, 1);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].title, "Kept");
        assert_eq!(response.pagination.items, 1);
    }

    #[test]
    fn test_unknown_item_type() {
        let html = r#"
            <li class="searchresult">
              <div class="itemtype">MERCH</div>
              <div class="heading"><a href="/m">Shirt</a></div>
            </li>
        "#;
        let response = parse(html, 1);
        assert_eq!(response.results[0].kind, ResultKind::Unknown);
    }

    #[test]
    fn test_missing_type_is_unknown() {
        let html = r#"<div class="searchresult"><div class="heading"><a href="/x">X</a></div></div>"#;
        let response = parse(html, 1);
        assert_eq!(response.results[0].kind, ResultKind::Unknown);
    }

    #[test]
    fn test_empty_page() {
        let response = parse("<html><body>nothing here</body></html>", 3);
        assert!(response.results.is_empty());
        assert_eq!(response.pagination.page, 3);
        assert_eq!(response.pagination.items, 0);
    }
}
