//! Tag and discovery listing extraction
//!
//! Both listings are selector-only; neither page carries a JSON-LD
//! block. Items without a title are dropped.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;

use super::{first_attr, first_text, image_src};
use crate::types::{DiscoverPage, ListingAlbum, TagPage};

static TAG_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse(".item_list .item").unwrap());
static ITEM_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static ITEM_TEXT: Lazy<Selector> = Lazy::new(|| Selector::parse(".itemtext").unwrap());
static ITEM_SUBTEXT: Lazy<Selector> = Lazy::new(|| Selector::parse(".itemsubtext").unwrap());
static ITEM_IMAGE: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

static DISCOVER_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse(".discover-item").unwrap());
static DISCOVER_TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse(".heading").unwrap());
static DISCOVER_ARTIST: Lazy<Selector> = Lazy::new(|| Selector::parse(".subhead").unwrap());
static DISCOVER_GENRE: Lazy<Selector> = Lazy::new(|| Selector::parse(".genre").unwrap());

/// Parse a tag browsing page; the query parameters are echoed into the
/// record so callers can tell which listing they are looking at
pub fn parse_tag(html: &str, tag: &str, sort: &str, page: u32) -> TagPage {
    let doc = Html::parse_document(html);
    let root = doc.root_element();

    let mut albums = Vec::new();
    for item in root.select(&TAG_ITEM) {
        let Some(title) = first_text(item, &ITEM_TEXT) else {
            continue;
        };
        albums.push(ListingAlbum {
            url: first_attr(item, &ITEM_LINK, "href"),
            title,
            artist: first_text(item, &ITEM_SUBTEXT),
            image: image_src(item, &ITEM_IMAGE),
            genre: None,
        });
    }

    debug!(count = albums.len(), tag, "Parsed tag page");

    TagPage {
        tag: tag.to_string(),
        sort: sort.to_string(),
        page,
        albums,
    }
}

/// Parse the discovery page
pub fn parse_discover(html: &str, genre: &str, subgenre: &str, sort: &str) -> DiscoverPage {
    let doc = Html::parse_document(html);
    let root = doc.root_element();

    let mut albums = Vec::new();
    for item in root.select(&DISCOVER_ITEM) {
        let Some(title) = first_text(item, &DISCOVER_TITLE) else {
            continue;
        };
        albums.push(ListingAlbum {
            url: first_attr(item, &ITEM_LINK, "href"),
            title,
            artist: first_text(item, &DISCOVER_ARTIST),
            image: image_src(item, &ITEM_IMAGE),
            genre: first_text(item, &DISCOVER_GENRE),
        });
    }

    debug!(count = albums.len(), genre, "Parsed discover page");

    DiscoverPage {
        genre: genre.to_string(),
        subgenre: subgenre.to_string(),
        sort: sort.to_string(),
        albums,
    }
}
