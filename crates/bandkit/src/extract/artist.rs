//! Artist/label page extraction

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use super::{first_attr, first_text, image_src, text_of};
use crate::types::{Artist, DiscographyEntry, ExternalLink};

static NAME: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#band-name-location .title").unwrap());
static LOCATION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#band-name-location .location").unwrap());
static BIO: Lazy<Selector> = Lazy::new(|| Selector::parse(".bio-text").unwrap());
static GRID_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse(".music-grid-item").unwrap());
static ITEM_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static ITEM_TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse(".title").unwrap());
static ITEM_IMAGE: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());
static BAND_LINKS: Lazy<Selector> = Lazy::new(|| Selector::parse("#band-links li a").unwrap());

/// Parse an artist (or label) page into its canonical record.
///
/// Discography hrefs are site-relative; they are joined against the page
/// URL. Grid entries without a title are dropped.
pub fn parse(html: &str, url: &str) -> Artist {
    let doc = Html::parse_document(html);
    let root = doc.root_element();

    let mut artist = Artist {
        url: url.to_string(),
        name: first_text(root, &NAME),
        location: first_text(root, &LOCATION),
        bio: first_text(root, &BIO),
        ..Default::default()
    };

    let base = Url::parse(url).ok();
    for item in root.select(&GRID_ITEM) {
        let Some(title) = first_text(item, &ITEM_TITLE) else {
            continue;
        };
        let href = first_attr(item, &ITEM_LINK, "href");
        let joined = match (&base, href) {
            (Some(base), Some(href)) => base
                .join(&href)
                .map(|u| u.to_string())
                .ok()
                .or(Some(href)),
            (None, href) => href,
            _ => None,
        };
        artist.discography.push(DiscographyEntry {
            url: joined,
            title,
            image: image_src(item, &ITEM_IMAGE),
        });
    }

    for link in root.select(&BAND_LINKS) {
        artist.links.push(ExternalLink {
            name: text_of(&link),
            url: link.value().attr("href").unwrap_or_default().to_string(),
        });
    }

    debug!(
        releases = artist.discography.len(),
        links = artist.links.len(),
        "Parsed artist page"
    );

    artist
}
